//! Vectorized arctangent
//!
//! Provides atan and atan2. `atan` folds |x| into `[-tan(π/8), tan(π/8)]`
//! with one of three transforms chosen per lane:
//!
//! | |x| range               | argument          | offset |
//! |-------------------------|-------------------|--------|
//! | ≤ tan(π/8)              | |x|               | 0      |
//! | (tan(π/8), tan(3π/8)]   | (|x|-1)/(|x|+1)   | π/4    |
//! | > tan(3π/8)             | -1/|x|            | π/2    |
//!
//! and evaluates an odd degree-9 minimax polynomial on the folded argument.

#![allow(clippy::excessive_precision)]

use crate::traits::SimdVector;

/// tan(π/8)
const TAN_PI_8: f32 = 0.41421356237309504880168872420969807856967187537695;

/// tan(3π/8)
const TAN_3PI_8: f32 = 2.41421356237309504880168872420969807856967187537698;

const FRAC_PI_4: f32 = 0.78539816339744830961566084581987572104929234984377;
const FRAC_PI_2: f32 = 1.57079632679489661923132169163975144209858469968754;
const PI: f32 = core::f32::consts::PI;

/// Vectorized arctangent
///
/// # Error Bounds
///
/// - Maximum relative error: < 5e-7 over the whole real line
/// - `atan(±∞) = ±π/2`
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::atan;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// atan(DefaultSimdVector::splat(1.0)).to_slice(&mut out);
/// assert!((out[0] - core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn atan<V: SimdVector>(x: V) -> V {
    let sign = x.and(V::sign_mask());
    let abs_x = x.and(V::abs_mask());
    let one = V::one();

    let range0 = abs_x;
    let range1 = abs_x.sub(one).div(abs_x.add(one));
    let range2 = one.neg().div(abs_x);

    let above_01 = abs_x.gt(V::splat(TAN_PI_8));
    let above_12 = abs_x.gt(V::splat(TAN_3PI_8));

    let arg = V::select(above_01, V::select(above_12, range2, range1), range0);
    let offset = V::select(
        above_01,
        V::select(above_12, V::splat(FRAC_PI_2), V::splat(FRAC_PI_4)),
        V::zero(),
    );

    let x2 = arg.mul(arg);
    let p = V::splat(-0.1387787759304046630859375)
        .add(x2.mul(V::splat(8.054284751415252685546875e-2)));
    let p = V::splat(0.19977732002735137939453125).add(x2.mul(p));
    let p = V::splat(-0.333329498767852783203125).add(x2.mul(p));
    let approx = offset.add(arg).add(arg.mul(x2).mul(p));

    approx.xor(sign)
}

/// Vectorized atan2(y, x) for full-range phase calculations
///
/// Computes the arctangent of y/x with proper quadrant handling.
/// Returns values in the range [-π, π].
///
/// - x = 0, y > 0: π/2
/// - x = 0, y < 0: -π/2
/// - x = 0, y = 0: 0
/// - x < 0, y = ±0: π
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::atan2;
///
/// let y = DefaultSimdVector::splat(1.0);
/// let x = DefaultSimdVector::splat(-1.0);
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// atan2(y, x).to_slice(&mut out);
/// assert!((out[0] - 3.0 * core::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn atan2<V: SimdVector>(y: V, x: V) -> V {
    let zero = V::zero();
    let pi = V::splat(PI);
    let half_pi = V::splat(FRAC_PI_2);

    let base_atan = atan(y.div(x));

    // Quadrants II and III: shift by ±π
    let y_negative = y.lt(zero);
    let adjustment = V::select(y_negative, pi.neg(), pi);
    let with_quadrant = V::select(x.lt(zero), base_atan.add(adjustment), base_atan);

    // x = 0: the division produced ±∞ or NaN
    let on_axis = V::select(y_negative, half_pi.neg(), half_pi);
    let x_zero_result = V::select(y.eq(zero), zero, on_axis);

    V::select(x.eq(zero), x_zero_result, with_quadrant)
}
