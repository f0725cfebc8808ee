//! Edge case tests for all backends
//!
//! Covers saturation and out-of-domain policies, the exact values the kernels
//! promise, and special IEEE inputs, which must never panic.

use lane_math::math::{
    acos, asin, atan, atan2, ceil, cos, exp, floor, log, log10, log2, pow, round, sign,
    signed_pow, signed_sqrt, sin, sincos, sqrt, tan, tanh,
};
use lane_math::{BackendType, DefaultSimdVector, SimdVector};

use test_utils::*;

const ALL_KERNELS: [(&str, Kernel); 19] = [
    ("sign", sign),
    ("round", round),
    ("floor", floor),
    ("ceil", ceil),
    ("exp", exp),
    ("log", log),
    ("log2", log2),
    ("log10", log10),
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("asin", asin),
    ("acos", acos),
    ("atan", atan),
    ("tanh", tanh),
    ("sqrt", sqrt),
    ("signed_sqrt", signed_sqrt),
    ("sin_via_sincos", |x| sincos(x).0),
    ("cos_via_sincos", |x| sincos(x).1),
];

#[test]
fn test_exp_saturates_to_max() {
    for &x in &[88.723f32, 89.0, 100.0, 1.0e10, f32::MAX, f32::INFINITY] {
        assert_eq!(eval_one(exp, x), f32::MAX, "exp({}) should saturate", x);
    }
}

#[test]
fn test_exp_underflows_to_zero() {
    for &x in &[-103.28f32, -104.0, -200.0, -1.0e10, -f32::MAX, f32::NEG_INFINITY] {
        assert_eq!(eval_one(exp, x).to_bits(), 0.0f32.to_bits(), "exp({}) should be +0", x);
    }
}

#[test]
fn test_exp_subnormal_band_is_non_negative_and_tiny() {
    let inputs = grid(-103.27, -87.3, 10_000);
    let outputs = eval_lanes(exp as Kernel, &inputs);
    for (&x, &y) in inputs.iter().zip(outputs.iter()) {
        assert!(
            (0.0..f32::MIN_POSITIVE * 2.0).contains(&y),
            "exp({}) = {} should flush toward zero",
            x,
            y
        );
    }
}

#[test]
fn test_pow_underflow_is_zero() {
    assert_eq!(eval_two(pow, 0.1, 40.0), 0.0);
    assert_eq!(eval_two(pow, 2.0, -130.0), 0.0);
    assert_eq!(eval_two(signed_pow, -0.1, 40.0).abs(), 0.0);
}

#[test]
fn test_acos_split_points() {
    assert_within_tolerance(eval_one(acos, -0.5), 2.0 * core::f64::consts::FRAC_PI_3, "acos(-0.5)");
    assert_within_tolerance(eval_one(acos, 0.5), core::f64::consts::FRAC_PI_3, "acos(0.5)");
}

#[test]
fn test_exp_just_inside_range_is_finite() {
    let top = eval_one(exp, 88.72);
    assert!(top.is_finite() && top > 3.0e38, "exp(88.72) = {}", top);
    let bottom = eval_one(exp, -87.0);
    assert!(bottom > 0.0 && bottom.is_normal(), "exp(-87) = {}", bottom);
}

#[test]
fn test_inverse_sine_cosine_out_of_domain() {
    for &x in &[1.0000001f32, -1.0000001, 1.5, -3.0, 1.0e30, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(eval_one(asin, x), 0.0, "asin({})", x);
        assert_eq!(eval_one(acos, x), 0.0, "acos({})", x);
    }
}

#[test]
fn test_out_of_domain_lane_does_not_leak() {
    let inputs = [2.0f32, 0.5, -7.0, -0.5, 1.0, 100.0, -1.0, 0.0];
    let asin_out = eval_lanes(asin as Kernel, &inputs);
    let exp_out = eval_lanes(exp as Kernel, &[200.0, 1.0, -300.0, 0.0, 2.0, 89.0, -1.0, 0.5]);

    for (&x, &y) in inputs.iter().zip(asin_out.iter()) {
        if x.abs() > 1.0 {
            assert_eq!(y, 0.0);
        } else {
            assert_within_tolerance(y, libm::asin(x as f64), "asin in mixed vector");
        }
    }
    assert_eq!(exp_out[0], f32::MAX);
    assert_within_tolerance(exp_out[1], core::f64::consts::E, "exp(1) in mixed vector");
    assert_eq!(exp_out[2], 0.0);
    assert_eq!(exp_out[3], 1.0);
}

#[test]
fn test_concrete_values() {
    assert_eq!(eval_one(exp, 0.0), 1.0);
    assert_eq!(eval_one(sin, 0.0), 0.0);
    assert_eq!(eval_one(cos, 0.0), 1.0);
    assert_eq!(eval_one(log, 1.0), 0.0);
    assert_eq!(eval_one(tanh, 0.0), 0.0);

    assert_within_tolerance(eval_one(tanh, 50.0), 1.0, "tanh(50)");
    assert_within_tolerance(eval_one(asin, 1.0), core::f64::consts::FRAC_PI_2, "asin(1)");
    assert_within_tolerance(eval_one(atan, 1.0), core::f64::consts::FRAC_PI_4, "atan(1)");
}

#[test]
fn test_sign_of_zero() {
    assert_eq!(eval_one(sign, 0.0).to_bits(), 0.0f32.to_bits());
    assert_eq!(eval_one(sign, -0.0).to_bits(), (-0.0f32).to_bits());
    assert_eq!(eval_one(sign, f32::MIN_POSITIVE), 1.0);
    assert_eq!(eval_one(sign, -f32::MAX), -1.0);
}

#[test]
fn test_rounding_edges() {
    assert_eq!(eval_one(round, 0.5), 0.0);
    assert_eq!(eval_one(round, 1.5), 2.0);
    assert_eq!(eval_one(round, 2.5), 2.0);
    assert_eq!(eval_one(round, -1.5), -2.0);
    assert_eq!(eval_one(floor, -0.5), -1.0);
    assert_eq!(eval_one(ceil, 0.5), 1.0);
    assert_eq!(eval_one(round, -0.3).to_bits(), (-0.0f32).to_bits());
    assert_eq!(eval_one(floor, 16_777_217.0), 16_777_217.0);
    assert_eq!(eval_one(ceil, -3.0e9), -3.0e9);
}

#[test]
fn test_atan2_special_points() {
    assert_eq!(eval_two(atan2, 0.0, 0.0), 0.0);
    assert_eq!(eval_two(atan2, 1.0, 0.0), core::f32::consts::FRAC_PI_2);
    assert_eq!(eval_two(atan2, -1.0, 0.0), -core::f32::consts::FRAC_PI_2);
    assert_eq!(eval_two(atan2, 0.0, -1.0), core::f32::consts::PI);
}

#[test]
fn test_signed_variants_on_negative_inputs() {
    assert_eq!(eval_one(signed_sqrt, -16.0), -4.0);
    let cube = eval_two(signed_pow, -2.0, 3.0);
    assert_within_tolerance(cube, -8.0, "signed_pow(-2, 3)");
    assert!(eval_two(signed_pow, -2.0, 0.5).is_finite());
}

#[test]
fn test_special_inputs_never_panic() {
    let specials = [
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.0,
        -0.0,
        1e-40,
        -1e-40,
        f32::MIN_POSITIVE,
        f32::MAX,
        -f32::MAX,
        1.0e20,
        -1.0e20,
    ];

    for (name, f) in ALL_KERNELS {
        // Only the absence of panics is checked; values are unspecified here
        let outputs = eval_lanes(f, &specials);
        assert_eq!(outputs.len(), specials.len(), "{} dropped lanes", name);
    }

    for &a in &specials {
        for &b in &specials {
            let _ = eval_two(pow, a, b);
            let _ = eval_two(signed_pow, a, b);
            let _ = eval_two(atan2, a, b);
        }
    }
}

#[test]
fn test_default_backend_is_reported() {
    let backend = BackendType::active::<DefaultSimdVector>();
    assert_eq!(backend, <DefaultSimdVector as SimdVector>::BACKEND);

    let expected_lanes = match backend {
        BackendType::Scalar => 1,
        BackendType::Neon => 4,
        BackendType::Avx2 => 8,
    };
    assert_eq!(DefaultSimdVector::LANES, expected_lanes);
}
