//! Rounding to integral values
//!
//! [`round`] uses the "add and subtract 2^23" trick: once a non-negative
//! float reaches 2^23 it has no fractional mantissa bits left, so the FPU's
//! default rounding mode (round half to even) snaps the value to an integer.
//! The sign is stripped first and restored afterwards so negative inputs round
//! symmetrically.
//!
//! [`floor`] and [`ceil`] correct the rounded value by one where it landed on
//! the wrong side of the input.

use crate::traits::SimdVector;

/// 2^23, the smallest float without fractional mantissa bits
const TWO_POW_23: f32 = 8_388_608.0;

/// Round each lane to the nearest integer, ties to even
///
/// `round(0.5) == 0.0`, `round(1.5) == 2.0`, `round(2.5) == 2.0`. Lanes whose
/// magnitude is already at least 2^23 are returned unchanged. Infinities and
/// NaN pass through.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::round;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// round(DefaultSimdVector::splat(-2.7)).to_slice(&mut out);
/// assert_eq!(out[0], -3.0);
/// ```
#[inline(always)]
pub fn round<V: SimdVector>(x: V) -> V {
    let two_pow_23 = V::splat(TWO_POW_23);
    let sign = x.and(V::sign_mask());
    let magnitude = sign.xor(x);
    let rounded = magnitude.add(two_pow_23).sub(two_pow_23);
    // Past 2^23 the add can round a second time; such lanes are integral anyway
    let rounded = V::select(magnitude.lt(two_pow_23), rounded, magnitude);
    sign.xor(rounded)
}

/// Largest integer not greater than each lane
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::floor;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// floor(DefaultSimdVector::splat(-0.5)).to_slice(&mut out);
/// assert_eq!(out[0], -1.0);
/// ```
#[inline(always)]
pub fn floor<V: SimdVector>(x: V) -> V {
    let rounded = round(x);
    let overshoot = V::from_mask(rounded.gt(x)).and(V::one());
    rounded.sub(overshoot)
}

/// Smallest integer not less than each lane
#[inline(always)]
pub fn ceil<V: SimdVector>(x: V) -> V {
    let rounded = round(x);
    let undershoot = V::from_mask(rounded.lt(x)).and(V::one());
    rounded.add(undershoot)
}
