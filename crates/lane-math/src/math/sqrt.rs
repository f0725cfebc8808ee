//! Vectorized square root functions

use crate::traits::SimdVector;

/// Vectorized square root
///
/// Computes √x using the backend's square root instruction
/// (`_mm256_sqrt_ps`, `vsqrtq_f32`, or `libm::sqrtf` on the scalar path),
/// which is correctly rounded.
///
/// # Error Bounds
///
/// - IEEE 754 compliant
/// - Returns NaN for x < 0
/// - Returns +∞ for x = +∞
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::sqrt;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// sqrt(DefaultSimdVector::splat(4.0)).to_slice(&mut out);
/// assert_eq!(out[0], 2.0);
/// ```
#[inline(always)]
pub fn sqrt<V: SimdVector>(x: V) -> V {
    x.sqrt()
}

/// Sign-preserving square root: `sign(x) · √|x|`
///
/// Negative inputs yield the negated root of their magnitude instead of NaN.
#[inline(always)]
pub fn signed_sqrt<V: SimdVector>(x: V) -> V {
    let sign = x.and(V::sign_mask());
    let magnitude = x.xor(sign);
    sign.or(magnitude.sqrt())
}
