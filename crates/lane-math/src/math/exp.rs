//! Vectorized natural exponential
//!
//! The argument is split as `x = g + n·ln2` with `n = round(x / ln2)`, so the
//! residual `g` stays within `[-ln2/2, ln2/2]`. `ln2` is subtracted in two
//! parts (Cody-Waite) to keep the residual exact. A degree-6 minimax
//! polynomial evaluates `e^g` and [`ldexp`] scales the result by `2^n`.
//!
//! # Error Bounds
//!
//! - Maximum relative error: < 5e-7 for x ∈ [-87.0, 88.72]
//!
//! # Saturation
//!
//! - x > 88.72284 returns `f32::MAX`
//! - x < -87.33655 returns `0.0`. This covers the underflow limit of
//!   -103.27893 and also the subnormal band above it, which the exponent
//!   arithmetic in `ldexp` cannot represent.
//!
//! # Example
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::exp;
//!
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! exp(DefaultSimdVector::splat(1.0)).to_slice(&mut out);
//! assert!((out[0] - core::f32::consts::E).abs() < 1e-6);
//!
//! exp(DefaultSimdVector::splat(1000.0)).to_slice(&mut out);
//! assert_eq!(out[0], f32::MAX);
//! ```

#![allow(clippy::excessive_precision)]

use crate::math::ieee::ldexp;
use crate::math::round::round;
use crate::traits::SimdVector;

/// Above this, `e^x` exceeds `f32::MAX`
const OVERFLOW_THRESHOLD: f32 = 88.72283905206835;

/// ln(f32::MIN_POSITIVE); below this `e^x` is subnormal or zero
const SUBNORMAL_THRESHOLD: f32 = -87.336_55;

const LOG2_E: f32 = 1.44269504088896341;

// ln2 split in a high part with few mantissa bits and a low correction
const LN2_HI: f32 = 0.693359375;
const LN2_LO: f32 = -2.12194440e-4;

/// Vectorized `e^x`
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::exp;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// exp(DefaultSimdVector::splat(0.0)).to_slice(&mut out);
/// assert_eq!(out[0], 1.0);
/// ```
#[inline(always)]
pub fn exp<V: SimdVector>(x: V) -> V {
    let result = exp_unchecked(x);
    let result = V::select(
        x.gt(V::splat(OVERFLOW_THRESHOLD)),
        V::splat(f32::MAX),
        result,
    );
    // Subnormal results flush as well, since `ldexp` would wrap the biased
    // exponent into the sign bit
    V::select(x.lt(V::splat(SUBNORMAL_THRESHOLD)), V::zero(), result)
}

/// `e^x` without the saturation masks
///
/// Only valid where the result is a normal float, roughly `x ∈ [-87.3, 88.7]`.
/// Callers that already bound their argument skip the two selects.
#[inline(always)]
pub(crate) fn exp_unchecked<V: SimdVector>(x: V) -> V {
    let z = round(x.mul(V::splat(LOG2_E)));
    let n = z.truncate_to_int();

    let g = x
        .sub(z.mul(V::splat(LN2_HI)))
        .sub(z.mul(V::splat(LN2_LO)));

    let p = V::splat(8.420792408287525177001953125e-3)
        .add(g.mul(V::splat(1.386119984090328216552734375e-3)));
    let p = V::splat(4.167006909847259521484375e-2).add(g.mul(p));
    let p = V::splat(0.16665561497211456298828125).add(g.mul(p));
    let p = V::splat(0.4999996721744537353515625).add(g.mul(p));
    let p = V::splat(1.00000035762786865234375).add(g.mul(p));
    let p = V::one().add(g.mul(p));

    ldexp(p, n)
}
