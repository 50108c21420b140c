// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::Scalar;
use crate::simd::Simd4;
use crate::vector::{Vector2, Vector3};

/// Four-component vector `(x, y, z, w)`, 16-byte aligned.
///
/// `w` is never managed implicitly. Use [`Vector4::from_point`] (`w = 1`) or
/// [`Vector4::from_direction`] (`w = 0`) when lifting a [`Vector3`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct Vector4<T> {
    pub(crate) data: [T; 4],
}

impl<T: Scalar> Vector4<T> {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);
    /// `(1, 0, 0, 0)`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// `(0, 1, 0, 0)`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// `(0, 0, 1, 0)`.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// `(0, 0, 0, 1)`.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    /// `(0, 1, 0, 0)`.
    pub const UP: Self = Self::UNIT_Y;
    /// `(0, -1, 0, 0)`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE, T::ZERO, T::ZERO);
    /// `(-1, 0, 0, 0)`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO, T::ZERO, T::ZERO);
    /// `(1, 0, 0, 0)`.
    pub const RIGHT: Self = Self::UNIT_X;
    /// `(0, 0, 1, 0)`.
    pub const FORWARD: Self = Self::UNIT_Z;
    /// `(0, 0, -1, 0)`.
    pub const BACKWARD: Self = Self::new(T::ZERO, T::ZERO, T::NEG_ONE, T::ZERO);

    /// Creates `(x, y, z, w)`.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// `(p.x, p.y, p.z, 1)`.
    #[must_use]
    pub fn from_point(p: Vector3<T>) -> Self {
        p.extend(T::ONE)
    }

    /// `(d.x, d.y, d.z, 0)`.
    #[must_use]
    pub fn from_direction(d: Vector3<T>) -> Self {
        d.extend(T::ZERO)
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

    /// W component.
    #[must_use]
    pub const fn w(&self) -> T {
        self.data[3]
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

    /// Sets the W component.
    pub fn set_w(&mut self, value: T) {
        self.data[3] = value;
    }

    /// Cross product of the `xyz` parts; the result has `w = 0`.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().cross3(rhs.lanes()))
    }

    /// `(x, y, z)`, dropping `w` without dividing by it.
    #[must_use]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    /// `(x, y, z)`.
    #[must_use]
    pub fn xyz(self) -> Vector3<T> {
        self.truncate()
    }

    /// `(x, y)`.
    #[must_use]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.data[0], self.data[1])
    }

    /// `(x/w, y/w, z/w)`.
    ///
    /// `w = 0` produces IEEE infinities or NaN.
    #[must_use]
    pub fn project(self) -> Vector3<T> {
        let inv_w = T::ONE / self.w();
        self.truncate() * inv_w
    }
}

super::impl_vector_common!(Vector4, 4, load4, store4, dot4);
