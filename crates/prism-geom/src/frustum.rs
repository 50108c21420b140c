// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::{Matrix4x4, Scalar, Vector3};
use tracing::trace;

use crate::plane::Plane;

/// Index of a frustum plane, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// `x >= -w`.
    Left,
    /// `x <= w`.
    Right,
    /// `y <= w`.
    Top,
    /// `y >= -w`.
    Bottom,
    /// `z >= 0`.
    Near,
    /// `z <= w`.
    Far,
}

impl FrustumPlane {
    /// All planes in storage order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Near,
        Self::Far,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Result of testing a volume against a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Entirely inside every plane.
    Inside,
    /// Crosses at least one plane.
    Intersecting,
    /// Entirely behind some plane.
    Outside,
}

/// Six inward-facing, normalized planes bounding a view volume.
///
/// Planes are extracted from a combined view-projection matrix (row-vector
/// convention, clip depth `0..1`) and stored as {left, right, top, bottom,
/// near, far}. A frustum is rebuilt wholesale by [`Frustum::derive`]; it is
/// never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum<T> {
    planes: [Plane<T>; 6],
}

impl<T: Scalar> Frustum<T> {
    /// Extracts the frustum of `view_projection`.
    #[must_use]
    pub fn from_view_projection(view_projection: &Matrix4x4<T>) -> Self {
        let mut frustum = Self {
            planes: [Plane::default(); 6],
        };
        frustum.derive(view_projection);
        frustum
    }

    /// Recomputes all six planes from `view_projection`.
    ///
    /// With `clip = v · M`, clip component `i` is `v` dotted with column `i`
    /// of `M`; the planes are sums and differences of those columns.
    pub fn derive(&mut self, view_projection: &Matrix4x4<T>) -> &mut Self {
        let c = view_projection.transposed().rows();
        let (x, y, z, w) = (c[0], c[1], c[2], c[3]);
        self.planes = [w + x, w - x, w - y, w + y, z, w - z]
            .map(|coefficients| Plane::from_coefficients(coefficients).normalized());
        trace!(planes = ?self.planes, "frustum derived");
        self
    }

    /// Planes in storage order.
    #[must_use]
    pub const fn planes(&self) -> &[Plane<T>; 6] {
        &self.planes
    }

    /// One plane.
    #[must_use]
    pub const fn plane(&self, which: FrustumPlane) -> &Plane<T> {
        &self.planes[which.index()]
    }

    /// `true` when `point` is inside or within tolerance of every plane.
    #[must_use]
    pub fn contains_point(&self, point: Vector3<T>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.dot_coord(point) >= -T::TOLERANCE)
    }

    /// Classifies a sphere against all six planes.
    #[must_use]
    pub fn contains_sphere(&self, center: Vector3<T>, radius: T) -> Containment {
        let mut result = Containment::Inside;
        for plane in &self.planes {
            let distance = plane.dot_coord(center);
            if distance < -radius {
                return Containment::Outside;
            }
            if distance < radius {
                result = Containment::Intersecting;
            }
        }
        result
    }

    /// `true` unless the sphere is entirely outside.
    #[must_use]
    pub fn intersects_sphere(&self, center: Vector3<T>, radius: T) -> bool {
        self.contains_sphere(center, radius) != Containment::Outside
    }
}
