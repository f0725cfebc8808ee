//! IEEE 754 field manipulation
//!
//! These helpers work directly on the sign, exponent and mantissa fields of
//! single-precision lanes. They are the building blocks for `exp`
//! (reconstruction via [`ldexp`]) and `log` (decomposition via [`frexp`]).
//!
//! Neither [`ldexp`] nor [`frexp`] treats zero, subnormal, infinite or NaN
//! inputs specially. The kernels only call them on normal values.

use crate::traits::{SimdInt, SimdVector};

/// Sign of each lane: `1.0` for positive, `-1.0` for negative
///
/// Zero lanes keep their own sign (`sign(-0.0) == -0.0`).
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdVector};
/// use lane_math::math::sign;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// sign(DefaultSimdVector::splat(-42.0)).to_slice(&mut out);
/// assert_eq!(out[0], -1.0);
/// ```
#[inline(always)]
pub fn sign<V: SimdVector>(x: V) -> V {
    let sign_bit = x.and(V::sign_mask());
    let non_zero = V::from_mask(x.ne(V::zero())).and(V::one());
    sign_bit.or(non_zero)
}

/// Multiply each lane by `2^n` by adding `n` to the biased exponent
///
/// The mantissa and sign are untouched. The caller guarantees that the
/// resulting exponent stays in the normal range; there is no overflow or
/// underflow handling.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdInt, SimdVector};
/// use lane_math::math::ldexp;
///
/// type Bits = <DefaultSimdVector as SimdVector>::IntBits;
///
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// ldexp(DefaultSimdVector::splat(1.5), Bits::splat(3)).to_slice(&mut out);
/// assert_eq!(out[0], 12.0);
/// ```
#[inline(always)]
pub fn ldexp<V: SimdVector>(x: V, n: V::IntBits) -> V {
    let exponent = x.and(V::exp_mask());
    let without_exponent = x.and_not(V::exp_mask());
    let new_exponent = n.shl(23).add(exponent.to_bits());
    without_exponent.or(V::from_bits(new_exponent))
}

/// Split each lane into a mantissa in `[0.5, 1)` and an integer exponent
///
/// For normal `x`, `x == m * 2^e`. The sign of `x` is carried on the
/// mantissa.
///
/// # Example
///
/// ```rust
/// use lane_math::{DefaultSimdVector, SimdInt, SimdMask, SimdVector};
/// use lane_math::math::frexp;
///
/// type Bits = <DefaultSimdVector as SimdVector>::IntBits;
///
/// let (m, e) = frexp(DefaultSimdVector::splat(8.0));
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// m.to_slice(&mut out);
/// assert_eq!(out[0], 0.5);
/// assert!(e.eq(Bits::splat(4)).all());
/// ```
#[inline(always)]
pub fn frexp<V: SimdVector>(x: V) -> (V, V::IntBits) {
    let exponent = x
        .and(V::exp_mask())
        .to_bits()
        .shr(23)
        .sub(V::IntBits::splat(126));
    let mantissa = x.and_not(V::exp_mask()).or(V::half_exponent());
    (mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::eval;
    use crate::traits::SimdMask;
    use crate::DefaultSimdVector;

    type Bits = <DefaultSimdVector as SimdVector>::IntBits;

    fn ldexp_scalar(x: f32, n: i32) -> f32 {
        let mut out = [0.0f32; DefaultSimdVector::LANES];
        ldexp(DefaultSimdVector::splat(x), Bits::splat(n)).to_slice(&mut out);
        out[0]
    }

    fn frexp_scalar(x: f32) -> (f32, Bits) {
        let (m, e) = frexp(DefaultSimdVector::splat(x));
        let mut out = [0.0f32; DefaultSimdVector::LANES];
        m.to_slice(&mut out);
        (out[0], e)
    }

    #[test]
    fn test_sign_values() {
        assert_eq!(eval(sign, 3.5), 1.0);
        assert_eq!(eval(sign, -0.001), -1.0);
        assert_eq!(eval(sign, f32::INFINITY), 1.0);
        assert_eq!(eval(sign, f32::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_sign_keeps_signed_zero() {
        assert_eq!(eval(sign, 0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(eval(sign, -0.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_ldexp_scales_by_powers_of_two() {
        assert_eq!(ldexp_scalar(1.0, 3), 8.0);
        assert_eq!(ldexp_scalar(0.75, -1), 0.375);
        assert_eq!(ldexp_scalar(-1.5, 10), -1536.0);
        assert_eq!(ldexp_scalar(3.0, 0), 3.0);
    }

    #[test]
    fn test_frexp_mantissa_range() {
        let (m, e) = frexp_scalar(8.0);
        assert_eq!(m, 0.5);
        assert!(e.eq(Bits::splat(4)).all());

        let (m, e) = frexp_scalar(1.0);
        assert_eq!(m, 0.5);
        assert!(e.eq(Bits::splat(1)).all());

        let (m, e) = frexp_scalar(0.75);
        assert_eq!(m, 0.75);
        assert!(e.eq(Bits::splat(0)).all());
    }

    #[test]
    fn test_frexp_keeps_sign_on_mantissa() {
        let (m, e) = frexp_scalar(-3.0);
        assert_eq!(m, -0.75);
        assert!(e.eq(Bits::splat(2)).all());
    }

    #[test]
    fn test_frexp_ldexp_reconstruct() {
        for &x in &[1.0e-30f32, 0.1, 1.0, 3.14159, 1234.5, -7.25, 6.0e37] {
            let (m, e) = frexp(DefaultSimdVector::splat(x));
            let mut out = [0.0f32; DefaultSimdVector::LANES];
            ldexp(m, e).to_slice(&mut out);
            assert_eq!(out[0].to_bits(), x.to_bits(), "frexp/ldexp failed for {}", x);
        }
    }
}
