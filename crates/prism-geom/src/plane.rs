// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use prism_math::text::{parse_tuple, write_tuple};
use prism_math::{Matrix4x4, ParseError, Scalar, Vector3, Vector4};

use crate::line::Line;

/// Which side of a plane a point or volume lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Strictly in the half-space the normal points into.
    Forward,
    /// Strictly behind the plane.
    Backward,
    /// Within [`Scalar::TOLERANCE`] of the plane, or straddling it.
    OnPlane,
}

/// Plane `a·x + b·y + c·z + d = 0`, stored as one 4-lane vector `(a, b, c, d)`.
///
/// Invariants:
/// - After [`Plane::normalize`], `‖(a, b, c)‖ = 1` and `d` is scaled by the
///   same factor, so [`Plane::dot_coord`] is a signed Euclidean distance.
/// - Constructors do not normalize unless stated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane<T> {
    coefficients: Vector4<T>,
}

impl<T: Scalar> Plane<T> {
    /// Plane with the given normal and signed offset `d`.
    #[must_use]
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Self {
            coefficients: normal.extend(d),
        }
    }

    /// Plane from raw coefficients `(a, b, c, d)`.
    #[must_use]
    pub const fn from_coefficients(coefficients: Vector4<T>) -> Self {
        Self { coefficients }
    }

    /// Plane through `point` with the given normal.
    #[must_use]
    pub fn from_point_normal(point: Vector3<T>, normal: Vector3<T>) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// Plane through three points, normal `(b - a) × (c - a)` normalized.
    ///
    /// Collinear points give a zero normal; the plane is then degenerate and
    /// every point classifies as [`Side::OnPlane`].
    #[must_use]
    pub fn from_points(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        let normal = (b - a).cross(c - a).normalized();
        Self::from_point_normal(a, normal)
    }

    /// `(a, b, c)`.
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        self.coefficients.xyz()
    }

    /// Signed offset `d`.
    #[must_use]
    pub fn d(&self) -> T {
        self.coefficients.w()
    }

    /// `(a, b, c, d)`.
    #[must_use]
    pub const fn coefficients(&self) -> Vector4<T> {
        self.coefficients
    }

    /// 4D dot product with `v`.
    #[must_use]
    pub fn dot(&self, v: Vector4<T>) -> T {
        self.coefficients.dot(v)
    }

    /// Signed distance-like value of a point (`w = 1`).
    #[must_use]
    pub fn dot_coord(&self, point: Vector3<T>) -> T {
        self.dot(Vector4::from_point(point))
    }

    /// Dot product of the normal with a direction (`w = 0`).
    #[must_use]
    pub fn dot_normal(&self, direction: Vector3<T>) -> T {
        self.dot(Vector4::from_direction(direction))
    }

    /// Scales all four coefficients so the normal has unit length. A zero
    /// normal is left unchanged, as is a normal with a non-finite component.
    /// A normal whose squared length overflows is first divided by its
    /// largest component magnitude.
    pub fn normalize(&mut self) -> &mut Self {
        let mut len_sq = self.normal().length_squared();
        if len_sq == T::INFINITY {
            let largest = self.normal().abs().max_element();
            if largest.is_finite() {
                self.coefficients /= largest;
                len_sq = self.normal().length_squared();
            }
        }
        if len_sq > T::ZERO && len_sq.is_finite() {
            self.coefficients *= len_sq.rsqrt();
        }
        self
    }

    /// Normalized copy.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Classifies a point against the plane with a `±TOLERANCE` band.
    #[must_use]
    pub fn intersect_point(&self, point: Vector3<T>) -> Side {
        classify(self.dot_coord(point))
    }

    /// Classifies a sphere: [`Side::OnPlane`] when it touches or straddles
    /// the plane. Assumes a normalized plane.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vector3<T>, radius: T) -> Side {
        let distance = self.dot_coord(center);
        if distance - radius > T::TOLERANCE {
            Side::Forward
        } else if distance + radius < -T::TOLERANCE {
            Side::Backward
        } else {
            Side::OnPlane
        }
    }

    /// `true` when the segment's endpoints are on opposite sides of the plane
    /// or either endpoint lies on it. No intersection point is computed.
    #[must_use]
    pub fn intersect_line(&self, line: &Line<T>) -> bool {
        self.dot_coord(line.begin()) * self.dot_coord(line.end()) <= T::ZERO
    }

    /// The plane in the space `matrix` maps into: `p · (M⁻¹)ᵀ`.
    ///
    /// A singular matrix inverts to the identity, leaving the plane as is.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix4x4<T>) -> Self {
        let inverse_transpose = matrix.inversed().transposed();
        Self::from_coefficients(inverse_transpose.transform_vector4(self.coefficients))
    }
}

fn classify<T: Scalar>(distance: T) -> Side {
    if distance > T::TOLERANCE {
        Side::Forward
    } else if distance < -T::TOLERANCE {
        Side::Backward
    } else {
        Side::OnPlane
    }
}

impl<T: Scalar> From<Vector4<T>> for Plane<T> {
    fn from(coefficients: Vector4<T>) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl<T: Scalar> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self.coefficients.as_slice())
    }
}

impl<T: Scalar> FromStr for Plane<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_tuple::<T, 4>(s).map(|c| Self::from_coefficients(Vector4::from_array(c)))
    }
}
