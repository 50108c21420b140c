// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction tags.
//!
//! Each math family has its own closed tag set, so a tag that means nothing
//! for a type cannot be passed to it: there is no `Identity` for vectors and
//! no `UnitX` for matrices. Every tag maps to exactly one constant.
//!
//! `NoInit` exists for callers that overwrite the value immediately. Safe Rust
//! has no uninitialized escape hatch, so it zero-fills.
//!
//! Axis tags that do not exist for a dimension (`UnitZ` on a [`Vector2`],
//! `UnitW` on a [`Vector3`]) are rejected by `TryFrom` with [`InitError`]
//! instead of falling back silently.

use core::fmt;

use thiserror::Error;

use crate::color::Color;
use crate::matrix::{Matrix3x3, Matrix4x4};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3, Vector4};

/// Vector construction tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorInit {
    /// All components zero.
    Zero,
    /// All components one.
    One,
    /// Zero-filled placeholder for immediate overwrite.
    NoInit,
    /// `+X` unit axis.
    UnitX,
    /// `+Y` unit axis.
    UnitY,
    /// `+Z` unit axis (3D and 4D).
    UnitZ,
    /// `+W` unit axis (4D only).
    UnitW,
    /// `+Y`.
    Up,
    /// `-Y`.
    Down,
    /// `-X`.
    Left,
    /// `+X`.
    Right,
    /// `+Z` (3D and 4D).
    Forward,
    /// `-Z` (3D and 4D).
    Backward,
}

impl VectorInit {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Zero,
        Self::One,
        Self::NoInit,
        Self::UnitX,
        Self::UnitY,
        Self::UnitZ,
        Self::UnitW,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Forward,
        Self::Backward,
    ];

    /// Lowest vector dimension in which the tag has a meaning.
    #[must_use]
    pub const fn min_dimension(self) -> usize {
        match self {
            Self::UnitW => 4,
            Self::UnitZ | Self::Forward | Self::Backward => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for VectorInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Matrix construction tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixInit {
    /// All elements zero.
    Zero,
    /// Identity.
    Identity,
    /// Zero-filled placeholder for immediate overwrite.
    NoInit,
}

/// Quaternion construction tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuaternionInit {
    /// `(0, 0, 0, 0)`.
    Zero,
    /// `(0, 0, 0, 1)`.
    Identity,
    /// Zero-filled placeholder for immediate overwrite.
    NoInit,
}

/// Color construction tags, one per named color constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorInit {
    /// Opaque black.
    Black,
    /// Opaque white.
    White,
    /// Opaque red.
    Red,
    /// Opaque green.
    Green,
    /// Opaque blue.
    Blue,
    /// All channels zero, alpha included.
    Transparent,
    /// Zero-filled placeholder for immediate overwrite.
    NoInit,
}

/// A construction tag that has no meaning for the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// The tag names an axis the vector does not have.
    #[error("{tag} is not defined for a {dimension}-component vector")]
    MissingAxis {
        /// Rejected tag.
        tag: VectorInit,
        /// Dimension of the target vector.
        dimension: usize,
    },
}

impl<T: Scalar> Vector4<T> {
    /// Constant selected by `tag`. Every vector tag is meaningful in 4D.
    #[must_use]
    pub const fn from_init(tag: VectorInit) -> Self {
        match tag {
            VectorInit::Zero | VectorInit::NoInit => Self::ZERO,
            VectorInit::One => Self::ONE,
            VectorInit::UnitX | VectorInit::Right => Self::UNIT_X,
            VectorInit::UnitY | VectorInit::Up => Self::UNIT_Y,
            VectorInit::UnitZ | VectorInit::Forward => Self::UNIT_Z,
            VectorInit::UnitW => Self::UNIT_W,
            VectorInit::Down => Self::DOWN,
            VectorInit::Left => Self::LEFT,
            VectorInit::Backward => Self::BACKWARD,
        }
    }
}

impl<T: Scalar> From<VectorInit> for Vector4<T> {
    fn from(tag: VectorInit) -> Self {
        Self::from_init(tag)
    }
}

impl<T: Scalar> TryFrom<VectorInit> for Vector3<T> {
    type Error = InitError;

    fn try_from(tag: VectorInit) -> Result<Self, InitError> {
        if tag.min_dimension() > 3 {
            return Err(InitError::MissingAxis { tag, dimension: 3 });
        }
        Ok(Vector4::from_init(tag).truncate())
    }
}

impl<T: Scalar> TryFrom<VectorInit> for Vector2<T> {
    type Error = InitError;

    fn try_from(tag: VectorInit) -> Result<Self, InitError> {
        if tag.min_dimension() > 2 {
            return Err(InitError::MissingAxis { tag, dimension: 2 });
        }
        Ok(Vector4::from_init(tag).xy())
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Constant selected by `tag`.
    #[must_use]
    pub const fn from_init(tag: MatrixInit) -> Self {
        match tag {
            MatrixInit::Zero | MatrixInit::NoInit => Self::ZERO,
            MatrixInit::Identity => Self::IDENTITY,
        }
    }
}

impl<T: Scalar> From<MatrixInit> for Matrix4x4<T> {
    fn from(tag: MatrixInit) -> Self {
        Self::from_init(tag)
    }
}

impl<T: Scalar> Matrix3x3<T> {
    /// Constant selected by `tag`.
    #[must_use]
    pub const fn from_init(tag: MatrixInit) -> Self {
        match tag {
            MatrixInit::Zero | MatrixInit::NoInit => Self::ZERO,
            MatrixInit::Identity => Self::IDENTITY,
        }
    }
}

impl<T: Scalar> From<MatrixInit> for Matrix3x3<T> {
    fn from(tag: MatrixInit) -> Self {
        Self::from_init(tag)
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Constant selected by `tag`.
    #[must_use]
    pub const fn from_init(tag: QuaternionInit) -> Self {
        match tag {
            QuaternionInit::Zero | QuaternionInit::NoInit => Self::ZERO,
            QuaternionInit::Identity => Self::IDENTITY,
        }
    }
}

impl<T: Scalar> From<QuaternionInit> for Quaternion<T> {
    fn from(tag: QuaternionInit) -> Self {
        Self::from_init(tag)
    }
}

impl<T: Scalar> Color<T> {
    /// Constant selected by `tag`.
    #[must_use]
    pub const fn from_init(tag: ColorInit) -> Self {
        match tag {
            ColorInit::Black => Self::BLACK,
            ColorInit::White => Self::WHITE,
            ColorInit::Red => Self::RED,
            ColorInit::Green => Self::GREEN,
            ColorInit::Blue => Self::BLUE,
            ColorInit::Transparent | ColorInit::NoInit => Self::TRANSPARENT,
        }
    }
}

impl<T: Scalar> From<ColorInit> for Color<T> {
    fn from(tag: ColorInit) -> Self {
        Self::from_init(tag)
    }
}
