// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::Scalar;
use crate::simd::Simd4;
use crate::vector::{Vector2, Vector4};

/// Three-component vector `(x, y, z)`.
///
/// Points and directions share this type; the matrix API distinguishes them
/// at the call site (`transform` / `transform_coord` for points,
/// `transform_normal` for directions).
///
/// The named direction constants follow the left-handed convention used by
/// the projection loaders: `+Y` is up, `+X` is right, `+Z` is forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3<T> {
    pub(crate) data: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);
    /// `(1, 0, 0)`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// `(0, 1, 0)`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// `(0, 0, 1)`.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::UNIT_Y;
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE, T::ZERO);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO, T::ZERO);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::UNIT_X;
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::UNIT_Z;
    /// `(0, 0, -1)`.
    pub const BACKWARD: Self = Self::new(T::ZERO, T::ZERO, T::NEG_ONE);

    /// Creates `(x, y, z)`.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    #[must_use]
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[must_use]
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    #[must_use]
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: T) {
        self.data[2] = value;
    }

    /// Cross product `self × rhs`.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().cross3(rhs.lanes()))
    }

    /// Mirrors `self` about the plane with unit normal `normal`:
    /// `v - 2 (v · n) n`.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::TWO * self.dot(normal))
    }

    /// Elevation angle in radians, matching `Matrix4x4::load_rotate_x`:
    /// positive when the vector dips below the horizontal plane.
    ///
    /// Returns zero for the zero vector.
    #[must_use]
    pub fn pitch(self) -> T {
        if self.is_zero() {
            return T::ZERO;
        }
        let horizontal = (self.x() * self.x() + self.z() * self.z()).sqrt();
        (-self.y()).atan2(horizontal)
    }

    /// Heading angle in radians around `+Y`, measured from `+Z` toward `+X`,
    /// matching `Matrix4x4::load_rotate_y`.
    ///
    /// Returns zero for the zero vector.
    #[must_use]
    pub fn yaw(self) -> T {
        if self.is_zero() {
            return T::ZERO;
        }
        self.x().atan2(self.z())
    }

    /// Widens to `(x, y, z, w)`.
    #[must_use]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops `z`.
    #[must_use]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.data[0], self.data[1])
    }

    /// `(x, y)`.
    #[must_use]
    pub fn xy(self) -> Vector2<T> {
        self.truncate()
    }
}

super::impl_vector_common!(Vector3, 3, load3, store3, dot3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_of_zero_vector_are_zero() {
        assert_eq!(Vector3::<f32>::ZERO.pitch(), 0.0);
        assert_eq!(Vector3::<f32>::ZERO.yaw(), 0.0);
    }

    #[test]
    fn yaw_measures_from_forward_toward_right() {
        let quarter = core::f32::consts::FRAC_PI_2;
        assert!((Vector3::<f32>::RIGHT.yaw() - quarter).abs() < 1e-6);
        assert!((Vector3::<f32>::DOWN.pitch() - quarter).abs() < 1e-6);
    }
}
