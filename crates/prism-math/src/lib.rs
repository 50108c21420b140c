// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! prism-math: scalar-generic vectors, matrices, quaternions and colors.
//!
//! Every type is generic over a [`Scalar`] (`f32`, and `f64` with the `f64`
//! feature). Four-lane work goes through [`Simd4`]: SSE2 or NEON for `f32`
//! when the `simd` feature is on and the target supports it, the portable
//! emulation otherwise. Both paths produce the same results within
//! [`Scalar::TOLERANCE`].
//!
//! Conventions shared by the whole crate:
//! - Row vectors and row-major matrices: `v' = v · M`, and `a * b` applies
//!   `a` first.
//! - Left-handed view and projection matrices with depth in `[0, 1]`.
//! - Degenerate input (zero-length normalize, singular inverse, zero axis)
//!   falls back to a documented value instead of producing NaN.
//! - Caller contracts (zero divisors, bad projection parameters) are checked
//!   with [`contract_check!`] in debug builds.

pub mod contract;
pub mod color;
pub mod init;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod simd;
pub mod text;
pub mod vector;

#[cfg(feature = "bytemuck")]
mod pod;

pub use color::Color;
pub use init::{ColorInit, InitError, MatrixInit, QuaternionInit, VectorInit};
pub use matrix::{Matrix3x3, Matrix4x4};
pub use quaternion::Quaternion;
pub use scalar::{clamp, deg_to_rad, rad_to_deg, Scalar};
pub use simd::{active_backend, Backend, Mask4, Simd4};
pub use text::{parse_tuple, ParseError};
pub use vector::{Vector2, Vector3, Vector4};
