//! SIMD backend implementations
//!
//! This module contains the vector types that satisfy the capability contract
//! in [`crate::traits`]. Hardware backends are selected at compile time via
//! cargo features and compiled out on non-matching architectures.

use crate::traits::SimdVector;

// Scalar backend (always available as fallback)
pub mod scalar;

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;

/// Backend Type Enumeration
///
/// Identifies the instruction set a [`SimdVector`] implementation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Scalar fallback (no SIMD, always available)
    Scalar,

    /// AVX2 backend (x86_64, 256-bit SIMD)
    Avx2,

    /// NEON backend (aarch64, 128-bit SIMD)
    Neon,
}

impl BackendType {
    /// Static name for logging/debugging: "scalar", "avx2" or "neon"
    pub const fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::Avx2 => "avx2",
            BackendType::Neon => "neon",
        }
    }

    /// Backend of the vector type a generic caller instantiated
    ///
    /// Logs the backend and lane width at `debug` level, which is the only
    /// logging this crate does; the kernels themselves stay side-effect free.
    pub fn active<V: SimdVector>() -> Self {
        log::debug!(
            "lane-math kernels instantiated on {} backend ({} lanes)",
            V::BACKEND.name(),
            V::LANES
        );
        V::BACKEND
    }
}
