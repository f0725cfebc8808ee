//! Vector capability contract
//!
//! Every kernel in [`crate::math`] is written once against these traits and
//! instantiated for any backend that implements them. The contract is split in
//! three parts:
//!
//! - [`SimdVector`]: lanes of IEEE 754 single-precision floats
//! - [`SimdInt`]: lanes of 32-bit integers with the same total width, used to
//!   take float bit patterns apart
//! - [`SimdMask`]: comparison results, one all-ones or all-zeros lane each
//!
//! Bitwise operations on [`SimdVector`] act on the bit pattern, never on the
//! numeric value. Reinterpreting bits ([`SimdVector::to_bits`],
//! [`SimdVector::from_bits`]) is a separate operation from numeric conversion
//! ([`SimdVector::truncate_to_int`], [`SimdInt::to_f32`]).

use crate::backends::BackendType;

/// Sign bit of an IEEE 754 single.
pub const SIGN_MASK: u32 = 0x8000_0000;

/// Every bit except the sign bit.
pub const ABS_MASK: u32 = 0x7FFF_FFFF;

/// Biased exponent field.
pub const EXP_MASK: u32 = 0x7F80_0000;

/// Exponent field of 0.5 (biased exponent 126).
///
/// OR-ing this into a value whose exponent field was cleared yields a mantissa
/// in `[0.5, 1)`.
pub const HALF_EXPONENT: u32 = 0x3F00_0000;

/// Core SIMD vector abstraction trait
///
/// All backends (scalar, AVX2, NEON) implement this trait, enabling zero-cost
/// generic kernels. Lanes are always `f32`.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
///
/// let a = DefaultSimdVector::splat(2.0);
/// let b = DefaultSimdVector::splat(3.0);
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// a.add(b).to_slice(&mut out);
/// assert!(out.iter().all(|&v| v == 5.0));
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// Associated mask type for comparison operations
    type Mask: SimdMask;

    /// Associated integer vector type for bit manipulation
    ///
    /// The `FloatVec = Self` bound ties the two widths together: a backend
    /// cannot pair a float vector with an integer vector of another width.
    type IntBits: SimdInt<FloatVec = Self>;

    /// Number of SIMD lanes (1 for scalar, 4 for NEON, 8 for AVX2)
    const LANES: usize;

    /// Backend this vector type belongs to
    const BACKEND: BackendType;

    // Construction

    /// Broadcast a scalar value to all SIMD lanes
    fn splat(value: f32) -> Self;

    /// Load from a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn from_slice(slice: &[f32]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [f32]);

    // Constant generators

    /// All lanes `0.0`
    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    /// All lanes `1.0`
    #[inline(always)]
    fn one() -> Self {
        Self::splat(1.0)
    }

    /// All lanes `0.5`
    #[inline(always)]
    fn half() -> Self {
        Self::splat(0.5)
    }

    /// All lanes hold [`SIGN_MASK`]
    #[inline(always)]
    fn sign_mask() -> Self {
        Self::from_bits(Self::IntBits::splat(SIGN_MASK as i32))
    }

    /// All lanes hold [`ABS_MASK`]
    #[inline(always)]
    fn abs_mask() -> Self {
        Self::from_bits(Self::IntBits::splat(ABS_MASK as i32))
    }

    /// All lanes hold [`EXP_MASK`]
    #[inline(always)]
    fn exp_mask() -> Self {
        Self::from_bits(Self::IntBits::splat(EXP_MASK as i32))
    }

    /// All lanes hold [`HALF_EXPONENT`]
    #[inline(always)]
    fn half_exponent() -> Self {
        Self::from_bits(Self::IntBits::splat(HALF_EXPONENT as i32))
    }

    // Arithmetic operations

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise division
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation
    fn neg(self) -> Self;

    /// Element-wise square root (IEEE 754, correctly rounded)
    fn sqrt(self) -> Self;

    // Bitwise operations on the raw lane bits

    /// `self & rhs`
    fn and(self, rhs: Self) -> Self;

    /// `self | rhs`
    fn or(self, rhs: Self) -> Self;

    /// `self ^ rhs`
    fn xor(self, rhs: Self) -> Self;

    /// `self & !rhs`
    fn and_not(self, rhs: Self) -> Self;

    // Comparison operations (return masks)

    /// Element-wise equality comparison
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Element-wise inequality comparison
    ///
    /// Unordered lanes (either side NaN) compare not-equal.
    fn ne(self, rhs: Self) -> Self::Mask;

    /// Element-wise greater-than comparison
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Element-wise less-than comparison
    fn lt(self, rhs: Self) -> Self::Mask;

    // Blending

    /// Select values based on mask
    ///
    /// For each lane: `mask[i] ? true_val[i] : false_val[i]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use lane_math::{DefaultSimdVector, SimdVector};
    /// let a = DefaultSimdVector::splat(1.0);
    /// let b = DefaultSimdVector::splat(2.0);
    /// let mask = a.lt(b); // All lanes true
    /// let mut out = [0.0f32; DefaultSimdVector::LANES];
    /// DefaultSimdVector::select(mask, a, b).to_slice(&mut out);
    /// assert!(out.iter().all(|&v| v == 1.0));
    /// ```
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    /// Reinterpret a mask as a float vector of all-ones / all-zeros lanes
    ///
    /// Lets a mask take part in bitwise arithmetic, e.g. `mask & one`
    /// yields `1.0` in true lanes and `0.0` elsewhere.
    fn from_mask(mask: Self::Mask) -> Self;

    // Conversions

    /// Convert to `i32` lanes, rounding toward zero
    ///
    /// Lanes outside the `i32` range (and NaN) are backend specific: the
    /// scalar and AVX2 backends return `i32::MIN`, NEON saturates and maps NaN
    /// to 0. Trig arguments with `|x|·4/π ≥ 2^31` hit this case, so their
    /// (already meaningless) results differ between NEON and the others.
    fn truncate_to_int(self) -> Self::IntBits;

    /// Convert integer lanes to float lanes (numerical conversion)
    fn from_int_cast(int_vec: Self::IntBits) -> Self;

    /// Reinterpret float bits as integer bits
    ///
    /// ```rust
    /// use lane_math::{DefaultSimdVector, SimdInt, SimdMask, SimdVector};
    /// let bits = DefaultSimdVector::splat(1.0).to_bits();
    /// let one = <DefaultSimdVector as SimdVector>::IntBits::splat(0x3F80_0000);
    /// assert!(bits.eq(one).all());
    /// ```
    fn to_bits(self) -> Self::IntBits;

    /// Reinterpret integer bits as float bits
    ///
    /// Inverse of [`SimdVector::to_bits`].
    fn from_bits(bits: Self::IntBits) -> Self;
}

/// Integer SIMD vector trait for bit manipulation
///
/// Lanes are 32-bit two's complement integers. Arithmetic wraps on every
/// backend. Shifts are logical.
pub trait SimdInt: Copy + Clone + Sized {
    /// Number of SIMD lanes (must match associated SimdVector)
    const LANES: usize;

    /// Associated float vector type
    type FloatVec: SimdVector<IntBits = Self>;

    /// Broadcast a scalar value to all SIMD lanes
    fn splat(value: i32) -> Self;

    /// Wrapping lane-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Wrapping lane-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Bitwise AND
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR
    fn or(self, rhs: Self) -> Self;

    /// `self & !rhs`
    fn and_not(self, rhs: Self) -> Self;

    /// Logical left shift
    fn shl(self, count: u32) -> Self;

    /// Logical right shift
    fn shr(self, count: u32) -> Self;

    /// Lane-wise equality, as a mask of the associated float vector
    fn eq(self, rhs: Self) -> <Self::FloatVec as SimdVector>::Mask;

    /// Convert to f32 vector (numerical conversion, not bit reinterpretation)
    fn to_f32(self) -> Self::FloatVec;
}

/// Mask type for conditional SIMD operations
///
/// Each lane is all-one-bits (true) or all-zero-bits (false). Masks drive
/// [`SimdVector::select`] and never collapse to per-lane branches inside the
/// kernels.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector, SimdMask};
/// let a = DefaultSimdVector::splat(1.0);
/// let b = DefaultSimdVector::splat(2.0);
/// let mask = a.lt(b);
/// assert!(mask.all()); // All lanes are true (1.0 < 2.0)
/// ```
pub trait SimdMask: Copy + Clone + Sized {
    /// Returns true if all lanes are set
    fn all(self) -> bool;

    /// Returns true if any lane is set
    fn any(self) -> bool;

    /// Returns true if no lanes are set
    fn none(self) -> bool;

    /// Bitwise AND of two masks
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR of two masks
    fn or(self, rhs: Self) -> Self;

    /// Bitwise NOT of mask
    fn not(self) -> Self;

    /// Bitwise XOR of two masks
    fn xor(self, rhs: Self) -> Self;
}
