#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lane-math: branchless single-precision elementary functions over SIMD lanes
//!
//! Every kernel is written once against the [`SimdVector`] contract and
//! compiles to straight-line vector code for each backend. Special cases are
//! handled with lane masks and [`SimdVector::select`], never with per-lane
//! branches, so all lanes of a vector always take the same instruction path.
//!
//! # Features
//!
//! - **Capability contract**: [`SimdVector`], [`SimdInt`] and [`SimdMask`]
//! - **Backends**: scalar (always), AVX2 (`avx2` feature), NEON (`neon` feature)
//! - **IEEE 754 helpers**: sign, ldexp, frexp, round, floor, ceil
//! - **Elementary functions**: exp, log/log2/log10, pow, sin/cos/tan,
//!   asin/acos/atan/atan2, tanh, sqrt
//! - **No allocations, no panics** inside the kernels
//!
//! # Quick Start
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::{exp, log};
//!
//! let x = DefaultSimdVector::splat(2.0);
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! log(exp(x)).to_slice(&mut out);
//! assert!(out.iter().all(|&v| (v - 2.0).abs() < 1e-6));
//! ```

// Float helpers such as `abs` used by the unit tests live in std
#[cfg(test)]
extern crate std;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Elementary function kernels
pub mod math;

pub use traits::{SimdInt, SimdMask, SimdVector};

pub use backends::BackendType;

pub use backends::scalar::{ScalarInt, ScalarMask, ScalarVector};

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{Avx2Int, Avx2Mask, Avx2Vector};

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonInt, NeonMask, NeonVector};

/// Default SIMD vector type based on enabled features
///
/// Resolves to the widest backend enabled for the target architecture and
/// falls back to [`ScalarVector`] otherwise. Enabling a feature for a foreign
/// architecture (e.g. `neon` on x86_64) is harmless.
#[cfg(not(any(
    all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")),
    all(feature = "neon", target_arch = "aarch64")
)))]
pub type DefaultSimdVector = ScalarVector;

/// Default SIMD vector type based on enabled features
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub type DefaultSimdVector = Avx2Vector;

/// Default SIMD vector type based on enabled features
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultSimdVector = NeonVector;
