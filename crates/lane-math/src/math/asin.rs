//! Vectorized arcsine and arccosine
//!
//! `asin` evaluates an odd degree-11 minimax polynomial on `[0, 0.5]`. Above
//! 0.5 it uses `asin(x) = π/2 - 2·asin(√((1 - x) / 2))`, which maps the
//! argument back into the polynomial's range. `acos` is assembled from `asin`
//! by three identities split at ±0.5.
//!
//! Both return exactly `0.0` for `|x| > 1` instead of NaN.
//!
//! # Error Bounds
//!
//! - `asin`: relative error < 5e-7 on [-1, 1]
//! - `acos`: relative error < 5e-7 on [-1, 1]

#![allow(clippy::excessive_precision)]

use crate::traits::SimdVector;

/// π/2 rounded to single precision
const FRAC_PI_2: f32 = 1.57079637050628662109375;

/// π rounded to single precision
const PI: f32 = 3.1415927410125732421875;

/// Odd polynomial for asin on [0, 0.5]
#[inline(always)]
fn asin_poly<V: SimdVector>(x: V) -> V {
    let x2 = x.mul(x);
    let p = V::splat(2.418550290167331695556640625e-2)
        .add(x2.mul(V::splat(4.21570129692554473876953125e-2)));
    let p = V::splat(4.54690195620059967041015625e-2).add(x2.mul(p));
    let p = V::splat(7.4953101575374603271484375e-2).add(x2.mul(p));
    let p = V::splat(0.166667520999908447265625).add(x2.mul(p));
    x.add(x.mul(x2).mul(p))
}

/// Vectorized arcsine
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::asin;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// asin(DefaultSimdVector::splat(0.5)).to_slice(&mut out);
/// assert!((out[0] - core::f32::consts::FRAC_PI_6).abs() < 1e-6);
///
/// asin(DefaultSimdVector::splat(1.5)).to_slice(&mut out);
/// assert_eq!(out[0], 0.0);
/// ```
#[inline(always)]
pub fn asin<V: SimdVector>(x: V) -> V {
    let abs_x = x.and(V::abs_mask());
    let sign = x.and(V::sign_mask());

    let above_half = abs_x.gt(V::half());
    let reduced = V::one().sub(abs_x).mul(V::half()).sqrt();
    let arg = V::select(above_half, reduced, abs_x);

    let p = asin_poly(arg);
    let p_reduced = V::splat(FRAC_PI_2).sub(p).sub(p);
    let approx = V::select(above_half, p_reduced, p).xor(sign);

    V::select(abs_x.gt(V::one()), V::zero(), approx)
}

/// Vectorized arccosine
///
/// - x < -0.5: `acos(x) = π - 2·asin(√((1 + x) / 2))`
/// - -0.5 ≤ x ≤ 0.5: `acos(x) = π/2 - asin(x)`
/// - x > 0.5: `acos(x) = 2·asin(√((1 - x) / 2))`
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::acos;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// acos(DefaultSimdVector::splat(-1.0)).to_slice(&mut out);
/// assert!((out[0] - core::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn acos<V: SimdVector>(x: V) -> V {
    let abs_x = x.and(V::abs_mask());

    let reduced = V::one().sub(abs_x).mul(V::half()).sqrt();
    let arg = V::select(abs_x.gt(V::half()), reduced, x);

    let s = asin(arg);
    let two_s = s.add(s);

    // Branch bounds must match the `abs_x > 0.5` test that picked `arg`
    let upper = V::select(x.gt(V::half()), two_s, V::splat(FRAC_PI_2).sub(s));
    let result = V::select(x.lt(V::splat(-0.5)), V::splat(PI).sub(two_s), upper);

    V::select(abs_x.gt(V::one()), V::zero(), result)
}
