//! Vectorized hyperbolic tangent
//!
//! Three regimes are computed for every lane and blended by magnitude:
//!
//! - |x| < 0.625: odd polynomial in x, which avoids the cancellation of the
//!   exponential form near zero
//! - 0.625 ≤ |x| ≤ 22: `1 - 2 / (e^(2|x|) + 1)`
//! - |x| > 22: ±1, since tanh(22) already rounds to 1.0 in single precision
//!
//! The middle regime never sees an argument outside `[1.25, 44]`, so it calls
//! the exponential without saturation masks.
//!
//! # Error Bounds
//!
//! - Maximum relative error: < 5e-7 for all finite inputs
//!
//! # Example
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::tanh;
//!
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! tanh(DefaultSimdVector::splat(0.5)).to_slice(&mut out);
//! assert!((out[0] - 0.462_117_16).abs() < 1e-6);
//! ```

use super::exp::exp_unchecked;
use crate::traits::SimdVector;

/// Above this magnitude tanh is 1.0 in single precision
const SATURATION: f32 = 22.0;

/// Below this magnitude the polynomial is used
const SMALL_LIMIT: f32 = 0.625;

/// Vectorized hyperbolic tangent
#[inline(always)]
pub fn tanh<V: SimdVector>(x: V) -> V {
    let one = V::one();
    let sign = x.and(V::sign_mask());
    let abs_x = x.xor(sign);

    // Small values
    let x2 = abs_x.mul(abs_x);
    let small = V::splat(-5.70498872745e-3)
        .mul(x2)
        .add(V::splat(2.06390887954e-2))
        .mul(x2)
        .sub(V::splat(5.37397155531e-2))
        .mul(x2)
        .add(V::splat(1.33314422036e-1))
        .mul(x2)
        .sub(V::splat(3.33332819422e-1))
        .mul(x2)
        .mul(x)
        .add(x);

    // Medium values
    let two = V::splat(2.0);
    let medium = one.sub(two.div(exp_unchecked(abs_x.add(abs_x)).add(one)));

    let large_or_medium = V::select(abs_x.gt(V::splat(SATURATION)), one, medium).or(sign);

    V::select(abs_x.lt(V::splat(SMALL_LIMIT)), small, large_or_medium)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::{eval, rel_error};

    #[test]
    fn test_tanh_zero() {
        assert_eq!(eval(tanh, 0.0), 0.0);
    }

    #[test]
    fn test_tanh_saturates() {
        let error = rel_error(eval(tanh, 50.0), 1.0);
        assert!(error < 5e-7, "tanh(50) rel error {}", error);
        assert_eq!(eval(tanh, 1.0e6), 1.0);
        assert_eq!(eval(tanh, -1.0e6), -1.0);
        assert_eq!(eval(tanh, f32::INFINITY), 1.0);
    }

    #[test]
    fn test_tanh_sweep() {
        let mut max_error = 0.0f64;
        let mut x = -30.0f32;
        while x <= 30.0 {
            if x.abs() > 1e-4 {
                max_error = max_error.max(rel_error(eval(tanh, x), libm::tanh(x as f64)));
            }
            x += 0.0137;
        }
        assert!(max_error < 5e-7, "tanh max relative error {}", max_error);
    }

    #[test]
    fn test_tanh_regime_boundaries() {
        for &x in &[0.6249, 0.625, 0.6251, 21.99, 22.0, 22.01, -0.625, -22.0] {
            let error = rel_error(eval(tanh, x), libm::tanh(x as f64));
            assert!(error < 5e-7, "tanh({}) rel error {}", x, error);
        }
    }

    #[test]
    fn test_tanh_is_odd() {
        for &x in &[0.1f32, 0.7, 3.0, 15.0] {
            assert_eq!(eval(tanh, -x).to_bits(), (-eval(tanh, x)).to_bits());
        }
    }
}
