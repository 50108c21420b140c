// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Square matrices.
//!
//! # Layout and convention
//! - Row-major storage: `rows[r][c]`. Rows are the unit of storage and
//!   iteration, and [`Matrix4x4::as_slice`] exposes the 16 scalars in that
//!   order for graphics-API uploads.
//! - Row vectors: a point transforms as `v' = v · M`, translation lives in
//!   row 3, and `a * b` applies `a` first, then `b`.
//! - Projection and view loaders are left-handed with clip-space depth in
//!   `[0, 1]`. Each loader states its convention.
//!
//! # Degenerate input
//! Inverting a singular matrix (`|det| <= Scalar::EPSILON`) yields the
//! identity and logs at `debug`. Use `try_inverse` to observe the failure.

mod matrix3x3;
mod matrix4x4;

pub use matrix3x3::Matrix3x3;
pub use matrix4x4::Matrix4x4;
