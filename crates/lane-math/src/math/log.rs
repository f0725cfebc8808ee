//! Vectorized logarithms
//!
//! [`frexp`] splits the input into a mantissa `m ∈ [0.5, 1)` and exponent `e`.
//! Mantissas below `√0.5` are doubled (and `e` decremented) so that
//! `u = m - 1` stays within `[√0.5 - 1, √2 - 1)`. A degree-9 minimax
//! polynomial then approximates `log(1 + u)`, and `e·ln2` is added back in two
//! parts to avoid cancellation.
//!
//! # Error Bounds
//!
//! - `log`: relative error < 5e-7 for positive normal inputs
//! - `log2`, `log10`: `log` scaled by a rounded constant, < 5e-7
//!
//! Zero, negative, subnormal, infinite and NaN inputs are outside the domain
//! and return unspecified values.
//!
//! # Example
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::{log, log2};
//!
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! log2(DefaultSimdVector::splat(1024.0)).to_slice(&mut out);
//! assert!((out[0] - 10.0).abs() < 1e-5);
//! ```

use crate::math::ieee::frexp;
use crate::traits::{SimdInt, SimdVector};

const SQRT_HALF: f32 = 0.707106781186547524;

// ln2 split into a short high part and a correction, as in exp
const LN2_HI: f32 = 0.693359375;
const LN2_LO: f32 = -2.12194440e-4;

/// `1 / ln(2)` rounded to single precision
const INV_LN2: f32 = core::f64::consts::LOG2_E as f32;

/// `1 / ln(10)` rounded to single precision
const INV_LN10: f32 = core::f64::consts::LOG10_E as f32;

/// Natural logarithm
#[inline(always)]
pub fn log<V: SimdVector>(x: V) -> V {
    let (m, e) = frexp(x);

    let below = m.lt(V::splat(SQRT_HALF));
    // All-ones lanes read back as -1
    let e = e.add(V::from_mask(below).to_bits());
    let u = m.add(m.and(V::from_mask(below)).sub(V::one()));

    let p = V::splat(7.0376836292E-2)
        .mul(u)
        .sub(V::splat(1.1514610310E-1))
        .mul(u)
        .add(V::splat(1.1676998740E-1))
        .mul(u)
        .sub(V::splat(1.2420140846E-1))
        .mul(u)
        .add(V::splat(1.4249322787E-1))
        .mul(u)
        .sub(V::splat(1.6668057665E-1))
        .mul(u)
        .add(V::splat(2.0000714765E-1))
        .mul(u)
        .sub(V::splat(2.4999993993E-1))
        .mul(u)
        .add(V::splat(3.3333331174E-1));
    let y = p.mul(u).mul(u).mul(u);

    let fe = e.to_f32();
    let y = y.add(fe.mul(V::splat(LN2_LO)));
    let y = y.sub(V::half().mul(u).mul(u));
    let z = u.add(y);

    z.add(V::splat(LN2_HI).mul(fe))
}

/// Base-2 logarithm
#[inline(always)]
pub fn log2<V: SimdVector>(x: V) -> V {
    log(x).mul(V::splat(INV_LN2))
}

/// Base-10 logarithm
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::log10;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// log10(DefaultSimdVector::splat(1000.0)).to_slice(&mut out);
/// assert!((out[0] - 3.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn log10<V: SimdVector>(x: V) -> V {
    log(x).mul(V::splat(INV_LN10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::{eval, rel_error};

    #[test]
    fn test_log_one() {
        assert_eq!(eval(log, 1.0), 0.0);
        assert_eq!(eval(log2, 1.0), 0.0);
        assert_eq!(eval(log10, 1.0), 0.0);
    }

    #[test]
    fn test_log_known_values() {
        for &x in &[core::f32::consts::E, 2.0, 0.5, 10.0, 0.7, 0.71, 1.0e-20, 3.0e25] {
            let result = eval(log, x);
            let expected = libm::log(x as f64);
            let error = rel_error(result, expected);
            assert!(error < 5e-7, "log({}) = {}, expected {}, rel error {}", x, result, expected, error);
        }
    }

    #[test]
    fn test_log_accuracy_sweep() {
        let mut max_error = 0.0f64;
        let mut x = 1.0e-30f32;
        while x < 1.0e30 {
            // log(1) is an exact zero crossing
            if (x - 1.0).abs() > 1e-3 {
                max_error = max_error.max(rel_error(eval(log, x), libm::log(x as f64)));
            }
            x *= 1.0371;
        }
        assert!(max_error < 5e-7, "log max relative error {}", max_error);
    }

    #[test]
    fn test_log2_powers_of_two() {
        for k in -20..=20 {
            let x = libm::ldexpf(1.0, k);
            let result = eval(log2, x);
            assert!(
                (result - k as f32).abs() <= 4e-6 * (k as f32).abs(),
                "log2(2^{}) = {}",
                k,
                result
            );
        }
    }

    #[test]
    fn test_log10_accuracy() {
        for &x in &[0.001f32, 0.5, 2.0, 100.0, 12345.0] {
            let error = rel_error(eval(log10, x), libm::log10(x as f64));
            assert!(error < 5e-7, "log10({}) rel error {}", x, error);
        }
    }
}
