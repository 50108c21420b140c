// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Two-component vector `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector2<T> {
    pub(crate) data: [T; 2],
}

impl<T: Scalar> Vector2<T> {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(T::ONE, T::ONE);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);
    /// `(0, 1)`.
    pub const UP: Self = Self::UNIT_Y;
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::UNIT_X;

    /// Creates `(x, y)`.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
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

    /// Sets the X component.
    pub fn set_x(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Widens to `(x, y, z)`.
    #[must_use]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], z)
    }
}

super::impl_vector_common!(Vector2, 2, load2, store2, dot4);
