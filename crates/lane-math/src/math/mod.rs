//! Branchless elementary function kernels
//!
//! Every function here is generic over [`SimdVector`](crate::SimdVector) and
//! evaluates all lanes with the same instruction sequence. Out-of-domain lanes
//! are patched afterwards with masks, so one bad lane never changes the
//! result of its neighbours.
//!
//! # Modules
//!
//! - `ieee`: sign, ldexp and frexp on the raw IEEE 754 fields
//! - `round`: round (ties to even), floor and ceil
//! - `exp`: natural exponential with saturation
//! - `log`: natural, base-2 and base-10 logarithms
//! - `pow`: power and sign-preserving power
//! - `sqrt`: square root and sign-preserving square root
//! - `trig`: sin, cos, tan and sincos with Cody-Waite reduction
//! - `asin`: arcsine and arccosine
//! - `atan`: arctangent and two-argument arctangent
//! - `tanh`: hyperbolic tangent
//!
//! # Example
//!
//! ```rust
//! use lane_math::{DefaultSimdVector, SimdVector};
//! use lane_math::math::{atan, tan};
//!
//! let x = DefaultSimdVector::splat(0.75);
//! let mut out = [0.0f32; DefaultSimdVector::LANES];
//! atan(tan(x)).to_slice(&mut out);
//! assert!(out.iter().all(|&v| (v - 0.75).abs() < 1e-6));
//! ```

pub mod asin;
pub mod atan;
pub mod exp;
pub mod ieee;
pub mod log;
pub mod pow;
pub mod round;
pub mod sqrt;
pub mod tanh;
pub mod trig;

pub use self::asin::{acos, asin};
pub use self::atan::{atan, atan2};
pub use self::exp::exp;
pub use self::ieee::{frexp, ldexp, sign};
pub use self::log::{log, log10, log2};
pub use self::pow::{pow, signed_pow};
pub use self::round::{ceil, floor, round};
pub use self::sqrt::{signed_sqrt, sqrt};
pub use self::tanh::tanh;
pub use self::trig::{cos, sin, sincos, tan};
