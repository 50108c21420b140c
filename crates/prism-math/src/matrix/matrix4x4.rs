// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut, Mul, MulAssign};

use tracing::{debug, trace};

use crate::matrix::Matrix3x3;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::simd::Simd4;
use crate::vector::{Vector3, Vector4};

/// Row-major 4×4 matrix, 16-byte aligned.
///
/// See the [module docs](crate::matrix) for the row-vector convention.
///
/// # Examples
/// ```
/// use prism_math::{Matrix4x4, Vector3};
/// let t = Matrix4x4::<f32>::from_translation(Vector3::new(5.0, -3.0, 2.0));
/// let p = t.transform(Vector3::new(2.0, 4.0, -1.0));
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Matrix4x4<T> {
    pub(crate) rows: [[T; 4]; 4],
}

impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);

    /// All zeros.
    pub const ZERO: Self = Self::new([[T::ZERO; 4]; 4]);

    /// Builds from rows.
    #[must_use]
    pub const fn new(rows: [[T; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Builds from four row vectors.
    #[must_use]
    pub fn from_rows(r0: Vector4<T>, r1: Vector4<T>, r2: Vector4<T>, r3: Vector4<T>) -> Self {
        Self::new([r0.data, r1.data, r2.data, r3.data])
    }

    /// Row `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn row(&self, index: usize) -> Vector4<T> {
        Vector4::from_array(self.rows[index])
    }

    /// Replaces row `index`.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    pub fn set_row(&mut self, index: usize, row: Vector4<T>) {
        self.rows[index] = row.data;
    }

    /// All rows as vectors.
    #[must_use]
    pub fn rows(&self) -> [Vector4<T>; 4] {
        self.rows.map(Vector4::from_array)
    }

    /// Column `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn column(&self, index: usize) -> Vector4<T> {
        Vector4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is `>= 4`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    /// Sets the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is `>= 4`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// The 16 elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    /// Mutable view of the 16 elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }

    /// Rows as nested arrays.
    #[must_use]
    pub fn to_array(self) -> [[T; 4]; 4] {
        self.rows
    }

    #[inline(always)]
    fn row_lanes(&self) -> [T::Simd; 4] {
        self.rows.map(T::Simd::from_array)
    }

    // v · M as a weighted sum of rows.
    #[inline(always)]
    fn combine(rows: &[T::Simd; 4], v: [T; 4]) -> T::Simd {
        rows[0]
            .scale(v[0])
            .add(rows[1].scale(v[1]))
            .add(rows[2].scale(v[2]))
            .add(rows[3].scale(v[3]))
    }

    // Loaders

    /// Overwrites with the identity.
    pub fn load_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Overwrites with a non-uniform scale.
    pub fn load_scale(&mut self, scale: Vector3<T>) -> &mut Self {
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([
            [scale.x(), z, z, z],
            [z, scale.y(), z, z],
            [z, z, scale.z(), z],
            [z, z, z, o],
        ]);
        self
    }

    /// Overwrites with a rotation of `angle` radians about `+X`.
    ///
    /// Left-handed: looking down `+X` toward the origin, positive angles turn
    /// `+Y` toward `+Z`.
    pub fn load_rotate_x(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[o, z, z, z], [z, c, s, z], [z, -s, c, z], [z, z, z, o]]);
        self
    }

    /// Overwrites with a rotation of `angle` radians about `+Y`
    /// (`+Z` turns toward `+X`).
    pub fn load_rotate_y(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[c, z, -s, z], [z, o, z, z], [s, z, c, z], [z, z, z, o]]);
        self
    }

    /// Overwrites with a rotation of `angle` radians about `+Z`
    /// (`+X` turns toward `+Y`).
    pub fn load_rotate_z(&mut self, angle: T) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([[c, s, z, z], [-s, c, z, z], [z, z, o, z], [z, z, z, o]]);
        self
    }

    /// Overwrites with a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields the identity.
    pub fn load_rotate_axis(&mut self, axis: Vector3<T>, angle: T) -> &mut Self {
        self.load_rotate(&Quaternion::from_axis_angle(axis, angle))
    }

    /// Overwrites with the rotation represented by `rotation`.
    ///
    /// The quaternion is used as given; a non-unit input produces a scaled,
    /// sheared basis.
    pub fn load_rotate(&mut self, rotation: &Quaternion<T>) -> &mut Self {
        let [r0, r1, r2] = rotation.rotation_rows();
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([
            [r0[0], r0[1], r0[2], z],
            [r1[0], r1[1], r1[2], z],
            [r2[0], r2[1], r2[2], z],
            [z, z, z, o],
        ]);
        self
    }

    /// Overwrites with `roll` about `+Z`, then `pitch` about `+X`, then `yaw`
    /// about `+Y` (all radians).
    pub fn load_rotate_yaw_pitch_roll(&mut self, yaw: T, pitch: T, roll: T) -> &mut Self {
        *self = Self::from_rotation_z(roll) * Self::from_rotation_x(pitch) * Self::from_rotation_y(yaw);
        self
    }

    /// Overwrites with a translation.
    pub fn load_translate(&mut self, translation: Vector3<T>) -> &mut Self {
        let (o, z) = (T::ONE, T::ZERO);
        *self = Self::new([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, o, z],
            [translation.x(), translation.y(), translation.z(), o],
        ]);
        self
    }

    /// Overwrites with scale, then rotation, then translation.
    pub fn load_world(
        &mut self,
        scale: Vector3<T>,
        rotation: &Quaternion<T>,
        translation: Vector3<T>,
    ) -> &mut Self {
        let r = rotation.rotation_rows();
        let z = T::ZERO;
        let s = scale.to_array();
        *self = Self::new([
            [r[0][0] * s[0], r[0][1] * s[0], r[0][2] * s[0], z],
            [r[1][0] * s[1], r[1][1] * s[1], r[1][2] * s[1], z],
            [r[2][0] * s[2], r[2][1] * s[2], r[2][2] * s[2], z],
            [translation.x(), translation.y(), translation.z(), T::ONE],
        ]);
        self
    }

    /// Overwrites with a left-handed perspective projection from a vertical
    /// field of view (radians) and `width / height` aspect ratio. Depth maps
    /// `near..far` to `0..1`.
    pub fn load_perspective_field_of_view(
        &mut self,
        fov_y: T,
        aspect: T,
        near: T,
        far: T,
    ) -> &mut Self {
        crate::contract_check!(fov_y > T::ZERO, "field of view must be positive");
        crate::contract_check!(aspect != T::ZERO, "aspect ratio must be non-zero");
        crate::contract_check!(near != far, "near and far planes coincide");
        let y_scale = T::ONE / (fov_y * T::HALF).tan();
        let x_scale = y_scale / aspect;
        let depth = far / (far - near);
        let z = T::ZERO;
        *self = Self::new([
            [x_scale, z, z, z],
            [z, y_scale, z, z],
            [z, z, depth, T::ONE],
            [z, z, -near * depth, z],
        ]);
        self
    }

    /// Overwrites with a left-handed perspective projection from the view
    /// volume's width and height at the near plane. Depth maps to `0..1`.
    pub fn load_perspective(&mut self, width: T, height: T, near: T, far: T) -> &mut Self {
        crate::contract_check!(width != T::ZERO && height != T::ZERO, "empty view volume");
        crate::contract_check!(near != far, "near and far planes coincide");
        let two_near = T::TWO * near;
        let depth = far / (far - near);
        let z = T::ZERO;
        *self = Self::new([
            [two_near / width, z, z, z],
            [z, two_near / height, z, z],
            [z, z, depth, T::ONE],
            [z, z, near * far / (near - far), z],
        ]);
        self
    }

    /// Overwrites with a left-handed orthographic projection centred on the
    /// view axis. Depth maps to `0..1`.
    pub fn load_orthographics(&mut self, width: T, height: T, near: T, far: T) -> &mut Self {
        crate::contract_check!(width != T::ZERO && height != T::ZERO, "empty view volume");
        crate::contract_check!(near != far, "near and far planes coincide");
        let depth = T::ONE / (far - near);
        let z = T::ZERO;
        *self = Self::new([
            [T::TWO / width, z, z, z],
            [z, T::TWO / height, z, z],
            [z, z, depth, z],
            [z, z, near / (near - far), T::ONE],
        ]);
        self
    }

    /// Overwrites with a left-handed off-centre orthographic projection.
    /// Depth maps to `0..1`.
    pub fn load_orthographics_off_center(
        &mut self,
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> &mut Self {
        crate::contract_check!(left != right && bottom != top, "empty view volume");
        crate::contract_check!(near != far, "near and far planes coincide");
        let z = T::ZERO;
        *self = Self::new([
            [T::TWO / (right - left), z, z, z],
            [z, T::TWO / (top - bottom), z, z],
            [z, z, T::ONE / (far - near), z],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                near / (near - far),
                T::ONE,
            ],
        ]);
        self
    }

    /// Overwrites with a left-handed view matrix at `eye` looking toward
    /// `target`.
    pub fn load_lookat(&mut self, eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> &mut Self {
        self.load_lookto(eye, target - eye, up)
    }

    /// Overwrites with a left-handed view matrix at `eye` looking along
    /// `direction`.
    ///
    /// `direction` and `up` must not be parallel; a degenerate basis yields
    /// zero rows rather than NaN.
    pub fn load_lookto(&mut self, eye: Vector3<T>, direction: Vector3<T>, up: Vector3<T>) -> &mut Self {
        let axis_z = direction.normalized();
        let axis_x = up.cross(axis_z).normalized();
        let axis_y = axis_z.cross(axis_x);
        let z = T::ZERO;
        *self = Self::new([
            [axis_x.x(), axis_y.x(), axis_z.x(), z],
            [axis_x.y(), axis_y.y(), axis_z.y(), z],
            [axis_x.z(), axis_y.z(), axis_z.z(), z],
            [-axis_x.dot(eye), -axis_y.dot(eye), -axis_z.dot(eye), T::ONE],
        ]);
        self
    }

    // Value constructors

    fn build(load: impl FnOnce(&mut Self) -> &mut Self) -> Self {
        let mut m = Self::IDENTITY;
        load(&mut m);
        m
    }

    /// Scale matrix.
    #[must_use]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::build(|m| m.load_scale(scale))
    }

    /// Rotation about `+X`; see [`load_rotate_x`](Self::load_rotate_x).
    #[must_use]
    pub fn from_rotation_x(angle: T) -> Self {
        Self::build(|m| m.load_rotate_x(angle))
    }

    /// Rotation about `+Y`; see [`load_rotate_y`](Self::load_rotate_y).
    #[must_use]
    pub fn from_rotation_y(angle: T) -> Self {
        Self::build(|m| m.load_rotate_y(angle))
    }

    /// Rotation about `+Z`; see [`load_rotate_z`](Self::load_rotate_z).
    #[must_use]
    pub fn from_rotation_z(angle: T) -> Self {
        Self::build(|m| m.load_rotate_z(angle))
    }

    /// Rotation about an arbitrary axis.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        Self::build(|m| m.load_rotate_axis(axis, angle))
    }

    /// Rotation matrix of a quaternion.
    #[must_use]
    pub fn from_quaternion(rotation: &Quaternion<T>) -> Self {
        Self::build(|m| m.load_rotate(rotation))
    }

    /// See [`load_rotate_yaw_pitch_roll`](Self::load_rotate_yaw_pitch_roll).
    #[must_use]
    pub fn from_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        Self::build(|m| m.load_rotate_yaw_pitch_roll(yaw, pitch, roll))
    }

    /// Translation matrix.
    #[must_use]
    pub fn from_translation(translation: Vector3<T>) -> Self {
        Self::build(|m| m.load_translate(translation))
    }

    /// Scale, then rotation, then translation.
    #[must_use]
    pub fn from_world(scale: Vector3<T>, rotation: &Quaternion<T>, translation: Vector3<T>) -> Self {
        Self::build(|m| m.load_world(scale, rotation, translation))
    }

    /// See [`load_perspective_field_of_view`](Self::load_perspective_field_of_view).
    #[must_use]
    pub fn perspective_field_of_view(fov_y: T, aspect: T, near: T, far: T) -> Self {
        Self::build(|m| m.load_perspective_field_of_view(fov_y, aspect, near, far))
    }

    /// See [`load_perspective`](Self::load_perspective).
    #[must_use]
    pub fn perspective(width: T, height: T, near: T, far: T) -> Self {
        Self::build(|m| m.load_perspective(width, height, near, far))
    }

    /// See [`load_orthographics`](Self::load_orthographics).
    #[must_use]
    pub fn orthographic(width: T, height: T, near: T, far: T) -> Self {
        Self::build(|m| m.load_orthographics(width, height, near, far))
    }

    /// See [`load_orthographics_off_center`](Self::load_orthographics_off_center).
    #[must_use]
    pub fn orthographic_off_center(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        Self::build(|m| m.load_orthographics_off_center(left, right, bottom, top, near, far))
    }

    /// See [`load_lookat`](Self::load_lookat).
    #[must_use]
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Self {
        Self::build(|m| m.load_lookat(eye, target, up))
    }

    /// See [`load_lookto`](Self::load_lookto).
    #[must_use]
    pub fn look_to(eye: Vector3<T>, direction: Vector3<T>, up: Vector3<T>) -> Self {
        Self::build(|m| m.load_lookto(eye, direction, up))
    }

    // Algebra

    /// `self * rhs`: applies `self`, then `rhs`.
    ///
    /// Both operands are read in full before the result is assembled, so
    /// `m = m.multiply(&m)` and `m *= m` are safe.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let b = rhs.row_lanes();
        Self::new(self.rows.map(|a| Self::combine(&b, a).to_array()))
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
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    // 2x2 sub-determinants of the top two rows (s) and bottom two rows (c).
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let a = &self.rows;
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        (s, c)
    }

    /// Determinant by cofactor expansion over 2×2 minors.
    #[must_use]
    pub fn determinant(&self) -> T {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverse, or `None` when `|det| <= Scalar::EPSILON`.
    ///
    /// Uses the closed-form adjugate (cofactor expansion), not an LU
    /// factorisation.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        let a = &self.rows;
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if det.abs() <= T::EPSILON {
            return None;
        }
        let inv = T::ONE / det;
        let rows = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];
        Some(Self::new(rows.map(|r| T::Simd::from_array(r).scale(inv).to_array())))
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

    // Transformation

    /// `v · M` for a full 4-component row vector.
    #[must_use]
    pub fn transform_vector4(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::from_array(Self::combine(&self.row_lanes(), v.data).to_array())
    }

    /// Transforms a point with `w = 1`, returning `xyz` without a
    /// perspective divide.
    #[must_use]
    pub fn transform(&self, point: Vector3<T>) -> Vector3<T> {
        self.transform_vector4(Vector4::from_point(point)).truncate()
    }

    /// Transforms a point with `w = 1` and divides by the resulting `w`.
    #[must_use]
    pub fn transform_coord(&self, point: Vector3<T>) -> Vector3<T> {
        self.transform_vector4(Vector4::from_point(point)).project()
    }

    /// Transforms a direction by the upper 3×3 block only (no translation).
    #[must_use]
    pub fn transform_normal(&self, normal: Vector3<T>) -> Vector3<T> {
        self.transform_vector4(Vector4::from_direction(normal)).truncate()
    }

    // Decomposition

    /// Translation part (row 3, `xyz`).
    #[must_use]
    pub fn translation(&self) -> Vector3<T> {
        let r = &self.rows[3];
        Vector3::new(r[0], r[1], r[2])
    }

    /// Upper-left 3×3 block.
    #[must_use]
    pub fn upper3x3(&self) -> Matrix3x3<T> {
        let m = &self.rows;
        Matrix3x3::new([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// Splits an affine transform into `(scale, rotation, translation)` such
    /// that `from_world(scale, &rotation, translation)` rebuilds it.
    ///
    /// A reflection (negative determinant) is folded into a negative `x`
    /// scale. A zero scale axis has no recoverable rotation; the identity
    /// quaternion is returned for it.
    #[must_use]
    pub fn decompose(&self) -> (Vector3<T>, Quaternion<T>, Vector3<T>) {
        let translation = self.translation();
        let basis = self.upper3x3();
        let mut axes = [basis.row(0), basis.row(1), basis.row(2)];
        let mut scale = Vector3::new(axes[0].length(), axes[1].length(), axes[2].length());
        if scale.x() == T::ZERO || scale.y() == T::ZERO || scale.z() == T::ZERO {
            trace!(?scale, "degenerate scale in decompose; rotation set to identity");
            return (scale, Quaternion::IDENTITY, translation);
        }
        if basis.determinant() < T::ZERO {
            scale.set_x(-scale.x());
        }
        for (axis, s) in axes.iter_mut().zip(scale.to_array()) {
            *axis /= s;
        }
        let rotation = Quaternion::from_matrix3x3(&Matrix3x3::from_rows(axes[0], axes[1], axes[2]));
        (scale, rotation, translation)
    }

    /// Interpolates two affine transforms.
    ///
    /// Each matrix is decomposed; scale and translation are interpolated
    /// linearly and rotation spherically, then the parts are recomposed. This
    /// approximates, and is not, a geodesic between the two matrices.
    #[must_use]
    pub fn slerp(from: &Self, to: &Self, t: T) -> Self {
        let (s0, r0, t0) = from.decompose();
        let (s1, r1, t1) = to.decompose();
        Self::from_world(s0.lerp(s1, t), &r0.slerp(&r1, t), t0.lerp(t1, t))
    }

    /// `true` when every element is within [`Scalar::TOLERANCE`] of `rhs`.
    #[must_use]
    pub fn near_equal(&self, rhs: &Self) -> bool {
        self.row_lanes()
            .iter()
            .zip(rhs.row_lanes().iter())
            .all(|(a, b)| a.all_near_eq(*b))
    }
}

impl<T: Scalar> Mul for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Row vector times matrix.
impl<T: Scalar> Mul<Matrix4x4<T>> for Vector4<T> {
    type Output = Self;

    fn mul(self, rhs: Matrix4x4<T>) -> Self {
        rhs.transform_vector4(self)
    }
}

impl<T: Scalar> Index<usize> for Matrix4x4<T> {
    type Output = [T; 4];

    fn index(&self, row: usize) -> &[T; 4] {
        &self.rows[row]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix4x4<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T; 4] {
        &mut self.rows[row]
    }
}

impl<T: Scalar> From<[[T; 4]; 4]> for Matrix4x4<T> {
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self::new(rows)
    }
}

impl<T: Scalar> From<Matrix3x3<T>> for Matrix4x4<T> {
    /// Embeds the 3×3 block with zero translation.
    fn from(m: Matrix3x3<T>) -> Self {
        let r = m.rows;
        let (o, z) = (T::ONE, T::ZERO);
        Self::new([
            [r[0][0], r[0][1], r[0][2], z],
            [r[1][0], r[1][1], r[1][2], z],
            [r[2][0], r[2][1], r[2][2], z],
            [z, z, z, o],
        ])
    }
}
