//! Scalar backend implementation
//!
//! This backend provides a single-lane implementation that works on any
//! platform. It is the reference the hardware backends are checked against.
//! Masks are kept as full 32-bit lane patterns and `select` blends bits, so the
//! scalar backend runs exactly the same branchless code path as the SIMD ones.

use crate::backends::BackendType;
use crate::traits::{SimdInt, SimdMask, SimdVector};

/// Scalar vector wrapper (single-lane SIMD)
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarVector(pub f32);

/// Scalar integer wrapper (single `i32` lane)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarInt(pub i32);

/// Scalar mask wrapper: `0xFFFF_FFFF` (true) or `0` (false)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarMask(pub u32);

impl ScalarMask {
    /// All-ones lane for `true`, all-zeros for `false`
    #[inline(always)]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            ScalarMask(u32::MAX)
        } else {
            ScalarMask(0)
        }
    }
}

const _: () = assert!(<ScalarVector as SimdVector>::LANES == <ScalarInt as SimdInt>::LANES);

// Floats that truncate to a representable i32: [-2^31, 2^31)
const I32_RANGE_LOW: f32 = -2_147_483_648.0;
const I32_RANGE_HIGH: f32 = 2_147_483_648.0;

impl SimdInt for ScalarInt {
    const LANES: usize = 1;
    type FloatVec = ScalarVector;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        ScalarInt(value)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_sub(rhs.0))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarInt(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarInt(self.0 | rhs.0)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        ScalarInt(self.0 & !rhs.0)
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        ScalarInt(((self.0 as u32).checked_shl(count).unwrap_or(0)) as i32)
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        ScalarInt(((self.0 as u32).checked_shr(count).unwrap_or(0)) as i32)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> ScalarMask {
        ScalarMask::from_bool(self.0 == rhs.0)
    }

    #[inline(always)]
    fn to_f32(self) -> ScalarVector {
        ScalarVector(self.0 as f32)
    }
}

impl SimdVector for ScalarVector {
    type Mask = ScalarMask;
    type IntBits = ScalarInt;

    const LANES: usize = 1;
    const BACKEND: BackendType = BackendType::Scalar;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        ScalarVector(libm::sqrtf(self.0))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarVector(f32::from_bits(self.0.to_bits() & rhs.0.to_bits()))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarVector(f32::from_bits(self.0.to_bits() | rhs.0.to_bits()))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarVector(f32::from_bits(self.0.to_bits() ^ rhs.0.to_bits()))
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        ScalarVector(f32::from_bits(self.0.to_bits() & !rhs.0.to_bits()))
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask::from_bool(self.0 == rhs.0)
    }

    #[inline(always)]
    fn ne(self, rhs: Self) -> Self::Mask {
        ScalarMask::from_bool(self.0 != rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        ScalarMask::from_bool(self.0 > rhs.0)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask::from_bool(self.0 < rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        // (mask & a) | (!mask & b)
        let bits = (mask.0 & true_val.0.to_bits()) | (!mask.0 & false_val.0.to_bits());
        ScalarVector(f32::from_bits(bits))
    }

    #[inline(always)]
    fn from_mask(mask: Self::Mask) -> Self {
        ScalarVector(f32::from_bits(mask.0))
    }

    #[inline(always)]
    fn truncate_to_int(self) -> Self::IntBits {
        // Out-of-range and NaN lanes give i32::MIN, the x86 `cvttps` sentinel
        if self.0 >= I32_RANGE_LOW && self.0 < I32_RANGE_HIGH {
            ScalarInt(self.0 as i32)
        } else {
            ScalarInt(i32::MIN)
        }
    }

    #[inline(always)]
    fn from_int_cast(int_vec: Self::IntBits) -> Self {
        int_vec.to_f32()
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        ScalarInt(self.0.to_bits() as i32)
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        ScalarVector(f32::from_bits(bits.0 as u32))
    }
}

impl SimdMask for ScalarMask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0 != 0
    }

    #[inline(always)]
    fn none(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarMask(self.0 | rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        ScalarMask(!self.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarMask(self.0 ^ rhs.0)
    }
}
