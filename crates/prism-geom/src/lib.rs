// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! prism-geom: planes, rays, segments and view frustums on top of
//! `prism-math`.
//!
//! - Classification is tolerance-banded: anything within
//!   `Scalar::TOLERANCE` of a plane is on it.
//! - Segment/plane tests are boolean only; no intersection points are
//!   computed.
//! - Frustums are extracted from a combined view-projection matrix and
//!   store their planes in the fixed order {left, right, top, bottom, near,
//!   far}.

/// View frustum extraction and culling.
pub mod frustum;
/// Line segments.
pub mod line;
/// Planes and side classification.
pub mod plane;
/// Rays.
pub mod ray;

pub use frustum::{Containment, Frustum, FrustumPlane};
pub use line::Line;
pub use plane::{Plane, Side};
pub use ray::Ray;
