// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::{Scalar, Vector3};

use crate::plane::Plane;

/// Half-line from `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
    origin: Vector3<T>,
    direction: Vector3<T>,
}

impl<T: Scalar> Ray<T> {
    /// Builds a ray; `direction` is normalized (a zero direction stays zero).
    #[must_use]
    pub fn new(origin: Vector3<T>, direction: Vector3<T>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Start point.
    #[must_use]
    pub const fn origin(&self) -> Vector3<T> {
        self.origin
    }

    /// Unit direction.
    #[must_use]
    pub const fn direction(&self) -> Vector3<T> {
        self.direction
    }

    /// `origin + direction * t`.
    #[must_use]
    pub fn point_at(&self, t: T) -> Vector3<T> {
        self.origin + self.direction * t
    }

    /// `true` when the ray touches the plane at its origin or crosses it at
    /// some `t >= 0`. A ray parallel to the plane never crosses it.
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane<T>) -> bool {
        let distance = plane.dot_coord(self.origin);
        if distance.near_zero() {
            return true;
        }
        let approach = plane.dot_normal(self.direction);
        if approach.near_zero() {
            return false;
        }
        -distance / approach >= T::ZERO
    }

    /// `true` when the ray hits a sphere, including rays starting inside it.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vector3<T>, radius: T) -> bool {
        let offset = self.origin - center;
        let b = offset.dot(self.direction);
        let c = offset.length_squared() - radius * radius;
        if c > T::ZERO && b > T::ZERO {
            return false;
        }
        b * b - c >= T::ZERO
    }
}
