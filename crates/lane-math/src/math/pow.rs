//! Vectorized power functions
//!
//! Provides `pow(base, exponent)` through the identity
//! `base^exponent = exp(exponent · ln(base))`.

use super::{exp, log};
use crate::traits::SimdVector;

/// Vectorized power function: base^exponent
///
/// # Error Bounds
///
/// The relative error of `log` is amplified by `|exponent · ln(base)|`, so
/// the bound is roughly `5e-7 · (1 + |exponent · ln(base)|)` for `base > 0`.
/// Negative bases go through `log` outside its domain and return unspecified
/// values; use [`signed_pow`] for those.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::pow;
///
/// let base = DefaultSimdVector::splat(2.0);
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// pow(base, DefaultSimdVector::splat(3.0)).to_slice(&mut out);
/// assert!((out[0] - 8.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn pow<V: SimdVector>(base: V, exponent: V) -> V {
    exp(exponent.mul(log(base)))
}

/// Sign-preserving power: `sign(base) · |base|^exponent`
///
/// Lets odd-symmetric curves (e.g. waveshapers) take negative bases without
/// producing NaN.
#[inline(always)]
pub fn signed_pow<V: SimdVector>(base: V, exponent: V) -> V {
    let sign = base.and(V::sign_mask());
    let magnitude = base.xor(sign);
    sign.or(pow(magnitude, exponent))
}
