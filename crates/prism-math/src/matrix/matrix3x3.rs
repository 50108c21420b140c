// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut, Mul, MulAssign};

use tracing::debug;

use crate::matrix::Matrix4x4;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Row-major 3×3 matrix for linear (non-translating) transforms.
///
/// Same row-vector convention as [`Matrix4x4`]; the rotation loaders produce
/// exactly the upper-left block of their 4×4 counterparts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix3x3<T> {
    pub(crate) rows: [[T; 3]; 3],
}

impl<T: Scalar> Default for Matrix3x3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Matrix3x3<T> {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);

    /// All zeros.
    pub const ZERO: Self = Self::new([[T::ZERO; 3]; 3]);

    /// Builds from rows.
    #[must_use]
    pub const fn new(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Builds from three row vectors.
    #[must_use]
    pub fn from_rows(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self::new([r0.data, r1.data, r2.data])
    }

    /// Row `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index >= 3`.
    #[must_use]
    pub fn row(&self, index: usize) -> Vector3<T> {
        Vector3::from_array(self.rows[index])
    }

    /// Replaces row `index`.
    ///
    /// # Panics
    /// Panics if `index >= 3`.
    pub fn set_row(&mut self, index: usize, row: Vector3<T>) {
        self.rows[index] = row.data;
    }

    /// All rows as vectors.
    #[must_use]
    pub fn rows(&self) -> [Vector3<T>; 3] {
        self.rows.map(Vector3::from_array)
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// The 9 elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    /// Mutable view of the 9 elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }

    /// Rows as nested arrays.
    #[must_use]
    pub fn to_array(self) -> [[T; 3]; 3] {
        self.rows
    }

    /// Overwrites with the identity.
    pub fn load_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Overwrites with a non-uniform scale.
    pub fn load_scale(&mut self, scale: Vector3<T>) -> &mut Self {
        let z = T::ZERO;
        *self = Self::new([[scale.x(), z, z], [z, scale.y(), z], [z, z, scale.z()]]);
        self
    }

    /// Rotation about `+X`, as [`Matrix4x4::load_rotate_x`].
    pub fn load_rotate_x(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[o, z, z], [z, c, s], [z, -s, c]]);
        self
    }

    /// Rotation about `+Y`, as [`Matrix4x4::load_rotate_y`].
    pub fn load_rotate_y(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[c, z, -s], [z, o, z], [s, z, c]]);
        self
    }

    /// Rotation about `+Z`, as [`Matrix4x4::load_rotate_z`].
    pub fn load_rotate_z(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[c, s, z], [-s, c, z], [z, z, o]]);
        self
    }

    /// Rotation of `angle` radians about `axis` (normalized first).
    pub fn load_rotate_axis(&mut self, axis: Vector3<T>, angle: T) -> &mut Self {
        self.load_rotate(&Quaternion::from_axis_angle(axis, angle))
    }

    /// Rotation represented by `rotation`, used as given.
    pub fn load_rotate(&mut self, rotation: &Quaternion<T>) -> &mut Self {
        *self = Self::new(rotation.rotation_rows());
        self
    }

    /// Scale matrix.
    #[must_use]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.load_scale(scale);
        m
    }

    /// Rotation about an arbitrary axis.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let mut m = Self::IDENTITY;
        m.load_rotate_axis(axis, angle);
        m
    }

    /// Rotation matrix of a quaternion.
    #[must_use]
    pub fn from_quaternion(rotation: &Quaternion<T>) -> Self {
        Self::new(rotation.rotation_rows())
    }

    /// `self * rhs`: applies `self`, then `rhs`. Both operands are read in
    /// full before the result is written.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let b = rhs.rows();
        Self::new(self.rows.map(|a| (b[0] * a[0] + b[1] * a[1] + b[2] * a[2]).data))
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Transposed copy.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let m = &self.rows;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Determinant, as the scalar triple product of the rows.
    #[must_use]
    pub fn determinant(&self) -> T {
        let r = self.rows();
        r[0].dot(r[1].cross(r[2]))
    }

    /// Inverse, or `None` when `|det| <= Scalar::EPSILON`.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        let r = self.rows();
        // Columns of the adjugate are cross products of row pairs.
        let c0 = r[1].cross(r[2]);
        let c1 = r[2].cross(r[0]);
        let c2 = r[0].cross(r[1]);
        let det = r[0].dot(c0);
        if det.abs() <= T::EPSILON {
            return None;
        }
        let inv = T::ONE / det;
        Some(Self::from_rows(c0 * inv, c1 * inv, c2 * inv).transposed())
    }

    /// Inverts in place. A singular matrix becomes the identity.
    pub fn inverse(&mut self) -> &mut Self {
        *self = self.inversed();
        self
    }

    /// Inverse copy. A singular matrix yields the identity.
    #[must_use]
    pub fn inversed(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            debug!(determinant = %self.determinant(), "singular matrix inverted; using identity");
            Self::IDENTITY
        })
    }

    /// `v · M`.
    #[must_use]
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        let r = self.rows();
        r[0] * v.x() + r[1] * v.y() + r[2] * v.z()
    }

    /// `true` when every element is within [`Scalar::TOLERANCE`] of `rhs`.
    #[must_use]
    pub fn near_equal(&self, rhs: &Self) -> bool {
        self.rows()
            .iter()
            .zip(rhs.rows().iter())
            .all(|(a, b)| a.near_equal(*b))
    }
}

impl<T: Scalar> Mul for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix3x3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Row vector times matrix.
impl<T: Scalar> Mul<Matrix3x3<T>> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: Matrix3x3<T>) -> Self {
        rhs.transform(self)
    }
}

impl<T: Scalar> Index<usize> for Matrix3x3<T> {
    type Output = [T; 3];

    fn index(&self, row: usize) -> &[T; 3] {
        &self.rows[row]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix3x3<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T; 3] {
        &mut self.rows[row]
    }
}

impl<T: Scalar> From<[[T; 3]; 3]> for Matrix3x3<T> {
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

impl<T: Scalar> From<Matrix4x4<T>> for Matrix3x3<T> {
    /// Takes the upper-left block, discarding translation and projection.
    fn from(m: Matrix4x4<T>) -> Self {
        m.upper3x3()
    }
}
