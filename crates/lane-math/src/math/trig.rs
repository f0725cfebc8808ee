//! Vectorized trigonometric functions
//!
//! sin, cos and tan share one argument reduction:
//!
//! 1. `j = trunc(|x| · 4/π)`, then `j = (j + 1) & !1` so `j` is even and
//!    names the multiple of π/4 nearest to `|x|` from above
//! 2. `base = |x| - j·π/4`, with π/4 subtracted in three parts (Cody-Waite)
//!    so the residual stays accurate for large `|x|`
//! 3. two minimax polynomials on `base`: one for the cosine-like octants and
//!    one for the sine-like octants, chosen per lane by bit 1 of `j`
//!
//! Bit 2 of `j` (or of `j - 2` for cos) flips the sign of the result.
//!
//! # Error Bounds
//!
//! - `sin`, `cos`: relative error < 5e-7 for |x| ≤ 100, with an absolute
//!   floor of about 1e-7 near zero crossings
//! - `tan`: relative error < 5e-7 for |x| < π/2 away from the poles
//!
//! Accuracy degrades slowly as |x| grows past a few thousand since the
//! three-part reduction runs out of bits.
//!
//! # Example
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::{cos, sin};
//!
//! let phase = DefaultSimdVector::splat(core::f32::consts::FRAC_PI_6);
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! sin(phase).to_slice(&mut out);
//! assert!((out[0] - 0.5).abs() < 1e-6);
//! cos(phase).to_slice(&mut out);
//! assert!((out[0] - 0.866_025_4).abs() < 1e-6);
//! ```

#![allow(clippy::excessive_precision)]

use crate::traits::{SimdInt, SimdVector};

const FOUR_OVER_PI: f32 = 1.27323954473516268615107010698011489627567716592367;

// π/4 = DP1 + DP2 + DP3
const DP1: f32 = 0.78515625;
const DP2: f32 = 2.4187564849853515625e-4;
const DP3: f32 = 3.77489497744594108e-8;

/// Reduced argument shared by sin, cos and tan
struct Reduction<V: SimdVector> {
    /// Even octant index
    j: V::IntBits,
    /// `|x| - j·π/4`
    base: V,
    /// `base²`
    z: V,
}

#[inline(always)]
fn reduce<V: SimdVector>(x: V) -> Reduction<V> {
    let abs_x = x.and(V::abs_mask());

    let j = abs_x.mul(V::splat(FOUR_OVER_PI)).truncate_to_int();
    let j = j.add(V::IntBits::splat(1)).and_not(V::IntBits::splat(1));
    let y = j.to_f32();

    let base = abs_x
        .sub(y.mul(V::splat(DP1)))
        .sub(y.mul(V::splat(DP2)))
        .sub(y.mul(V::splat(DP3)));
    let z = base.mul(base);

    Reduction { j, base, z }
}

/// cos(base) on [-π/4, π/4]
#[inline(always)]
fn cos_poly<V: SimdVector>(r: &Reduction<V>) -> V {
    let z = r.z;
    V::splat(2.443315711809948E-005)
        .mul(z)
        .sub(V::splat(1.388731625493765E-003))
        .mul(z)
        .add(V::splat(4.166664568298827E-002))
        .mul(z)
        .mul(z)
        .sub(V::half().mul(z))
        .add(V::one())
}

/// sin(base) on [-π/4, π/4]
#[inline(always)]
fn sin_poly<V: SimdVector>(r: &Reduction<V>) -> V {
    let z = r.z;
    V::splat(-1.9515295891E-4)
        .mul(z)
        .add(V::splat(8.3321608736E-3))
        .mul(z)
        .sub(V::splat(1.6666654611E-1))
        .mul(z)
        .mul(r.base)
        .add(r.base)
}

#[inline(always)]
fn sin_from<V: SimdVector>(x: V, r: &Reduction<V>, p_cos: V, p_sin: V) -> V {
    let quadrant_sign = V::from_bits(r.j.and(V::IntBits::splat(4)).shl(29));
    let sign = x.and(V::sign_mask()).xor(quadrant_sign);

    let use_sin = r.j.and(V::IntBits::splat(2)).eq(V::IntBits::splat(0));
    V::select(use_sin, p_sin, p_cos).xor(sign)
}

#[inline(always)]
fn cos_from<V: SimdVector>(r: &Reduction<V>, p_cos: V, p_sin: V) -> V {
    let jm2 = r.j.sub(V::IntBits::splat(2));
    let sign = V::from_bits(V::IntBits::splat(4).and_not(jm2).shl(29));

    let use_sin = jm2.and(V::IntBits::splat(2)).eq(V::IntBits::splat(0));
    V::select(use_sin, p_sin, p_cos).xor(sign)
}

/// Vectorized sine
#[inline(always)]
pub fn sin<V: SimdVector>(x: V) -> V {
    let r = reduce(x);
    let p_cos = cos_poly(&r);
    let p_sin = sin_poly(&r);
    sin_from(x, &r, p_cos, p_sin)
}

/// Vectorized cosine
#[inline(always)]
pub fn cos<V: SimdVector>(x: V) -> V {
    let r = reduce(x);
    let p_cos = cos_poly(&r);
    let p_sin = sin_poly(&r);
    cos_from(&r, p_cos, p_sin)
}

/// Sine and cosine from one argument reduction
///
/// Each output is bit-identical to what [`sin`] and [`cos`] return on their
/// own.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::sincos;
///
/// let (s, c) = sincos(DefaultSimdVector::splat(0.0));
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// s.to_slice(&mut out);
/// assert_eq!(out[0], 0.0);
/// c.to_slice(&mut out);
/// assert_eq!(out[0], 1.0);
/// ```
#[inline(always)]
pub fn sincos<V: SimdVector>(x: V) -> (V, V) {
    let r = reduce(x);
    let p_cos = cos_poly(&r);
    let p_sin = sin_poly(&r);
    (sin_from(x, &r, p_cos, p_sin), cos_from(&r, p_cos, p_sin))
}

/// Vectorized tangent
///
/// In the octants around odd multiples of π/2 the result is `-1 / tan(base)`.
/// Exactly at a pole the reduction leaves a tiny residual, so the result is a
/// large finite value rather than infinity.
#[inline(always)]
pub fn tan<V: SimdVector>(x: V) -> V {
    let r = reduce(x);
    let (t, t2) = (r.base, r.z);

    let p = V::splat(3.1127030961215496063232421875e-3)
        .add(t2.mul(V::splat(9.3892104923725128173828125e-3)));
    let p = V::splat(2.443529665470123291015625e-2).add(t2.mul(p));
    let p = V::splat(5.3409568965435028076171875e-2).add(t2.mul(p));
    let p = V::splat(0.1333882510662078857421875).add(t2.mul(p));
    let p = V::splat(0.3333315551280975341796875).add(t2.mul(p));
    let approx = t.add(t.mul(t2).mul(p));

    let cotangent = V::one().neg().div(approx);
    let near_zero = r.j.and(V::IntBits::splat(2)).eq(V::IntBits::splat(0));
    V::select(near_zero, approx, cotangent).xor(x.and(V::sign_mask()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::eval;
    use crate::DefaultSimdVector;

    fn check(name: &str, f: fn(DefaultSimdVector) -> DefaultSimdVector, reference: fn(f64) -> f64, x: f32) {
        let result = eval(f, x) as f64;
        let expected = reference(x as f64);
        let error = (result - expected).abs();
        assert!(
            error <= 5e-7 * expected.abs() + 1e-7,
            "{}({}) = {}, expected {}, error {}",
            name,
            x,
            result,
            expected,
            error
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(eval(sin, 0.0), 0.0);
        assert_eq!(eval(cos, 0.0), 1.0);
        assert_eq!(eval(tan, 0.0), 0.0);
    }

    #[test]
    fn test_sin_cos_sweep() {
        let mut x = -100.0f32;
        while x <= 100.0 {
            check("sin", sin, libm::sin, x);
            check("cos", cos, libm::cos, x);
            x += 0.0371;
        }
    }

    #[test]
    fn test_octant_boundaries() {
        for k in -16..=16 {
            let x = k as f32 * core::f32::consts::FRAC_PI_4;
            check("sin", sin, libm::sin, x);
            check("cos", cos, libm::cos, x);
        }
    }

    #[test]
    fn test_sin_is_odd() {
        for &x in &[0.3f32, 1.7, 2.9, 17.25, 60.0] {
            assert_eq!(eval(sin, -x).to_bits(), (-eval(sin, x)).to_bits());
            assert_eq!(eval(cos, -x).to_bits(), eval(cos, x).to_bits());
        }
    }

    #[test]
    fn test_tan_sweep() {
        let mut x = -1.5f32;
        while x <= 1.5 {
            check("tan", tan, libm::tan, x);
            x += 0.0123;
        }
    }

    #[test]
    fn test_sincos_matches_separate_calls() {
        let mut x = -20.0f32;
        while x <= 20.0 {
            let (s, c) = sincos(DefaultSimdVector::splat(x));
            let mut out = [0.0f32; DefaultSimdVector::LANES];
            s.to_slice(&mut out);
            assert_eq!(out[0].to_bits(), eval(sin, x).to_bits());
            c.to_slice(&mut out);
            assert_eq!(out[0].to_bits(), eval(cos, x).to_bits());
            x += 0.77;
        }
    }
}
