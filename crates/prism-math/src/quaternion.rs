// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation quaternions.
//!
//! Stored as `(x, y, z, w)` with `w` the scalar part. Composition is the
//! Hamilton product: `a * b` rotates by `b` first, then by `a`, matching
//! [`Quaternion::rotate`] (`q v q*`). The rotation matrix of `a * b` is
//! therefore `M(b) * M(a)` under the row-vector matrix convention.
//!
//! Nothing renormalizes automatically. Long multiplication chains drift off
//! the unit sphere; call [`Quaternion::normalize`] when that matters.

use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::matrix::{Matrix3x3, Matrix4x4};
use crate::scalar::Scalar;
use crate::simd::Simd4;
use crate::vector::Vector3;

/// Below this `1 - cos(θ)`, slerp falls back to lerp.
const SLERP_LINEAR_THRESHOLD: f32 = 0.001;

/// Quaternion `(x, y, z, w)`, 16-byte aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Quaternion<T> {
    pub(crate) data: [T; 4],
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Quaternion<T> {
    /// No rotation, `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Creates `(x, y, z, w)`.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Builds from `[x, y, z, w]`.
    #[must_use]
    pub const fn from_array(data: [T; 4]) -> Self {
        Self { data }
    }

    /// Components as `[x, y, z, w]`.
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Contiguous view of `[x, y, z, w]`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// X (vector part).
    #[must_use]
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Y (vector part).
    #[must_use]
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Z (vector part).
    #[must_use]
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// W (scalar part).
    #[must_use]
    pub const fn w(&self) -> T {
        self.data[3]
    }

    /// Sets X.
    pub fn set_x(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Sets Y.
    pub fn set_y(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Sets Z.
    pub fn set_z(&mut self, value: T) {
        self.data[2] = value;
    }

    /// Sets W.
    pub fn set_w(&mut self, value: T) {
        self.data[3] = value;
    }

    /// Vector part `(x, y, z)`.
    #[must_use]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    #[inline(always)]
    fn lanes(self) -> T::Simd {
        T::Simd::from_array(self.data)
    }

    #[inline(always)]
    fn from_lanes(lanes: T::Simd) -> Self {
        Self::from_array(lanes.to_array())
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields the identity.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        if axis.length_squared() == T::ZERO {
            return Self::IDENTITY;
        }
        let (s, c) = (angle * T::HALF).sin_cos();
        let v = axis.normalized() * s;
        Self::new(v.x(), v.y(), v.z(), c)
    }

    /// `roll` about `+Z`, then `pitch` about `+X`, then `yaw` about `+Y`.
    ///
    /// Same rotation as `Matrix4x4::from_yaw_pitch_roll`.
    #[must_use]
    pub fn from_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        let qy = Self::from_axis_angle(Vector3::UNIT_Y, yaw);
        let qp = Self::from_axis_angle(Vector3::UNIT_X, pitch);
        let qr = Self::from_axis_angle(Vector3::UNIT_Z, roll);
        qy * qp * qr
    }

    /// Rotation of the upper-left 3×3 block of `m`, which must be
    /// orthonormal.
    #[must_use]
    pub fn from_matrix(m: &Matrix4x4<T>) -> Self {
        Self::from_rotation_rows(&m.upper3x3().rows)
    }

    /// Rotation of an orthonormal 3×3 matrix.
    #[must_use]
    pub fn from_matrix3x3(m: &Matrix3x3<T>) -> Self {
        Self::from_rotation_rows(&m.rows)
    }

    fn from_rotation_rows(m: &[[T; 3]; 3]) -> Self {
        const NEXT: [usize; 3] = [1, 2, 0];
        let trace = m[0][0] + m[1][1] + m[2][2] + T::ONE;
        if trace >= T::ONE {
            let root = trace.sqrt();
            let s = T::HALF / root;
            return Self::new(
                (m[1][2] - m[2][1]) * s,
                (m[2][0] - m[0][2]) * s,
                (m[0][1] - m[1][0]) * s,
                root * T::HALF,
            );
        }
        // Largest diagonal term picks the component solved for directly.
        let mut i = 0;
        if m[0][0] <= m[1][1] {
            i = 1;
        }
        if m[2][2] > m[i][i] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];
        let root = (m[i][i] - m[j][j] - m[k][k] + T::ONE).sqrt();
        let s = T::HALF / root;
        let mut q = [T::ZERO; 4];
        q[i] = root * T::HALF;
        q[j] = (m[i][j] + m[j][i]) * s;
        q[k] = (m[i][k] + m[k][i]) * s;
        q[3] = (m[j][k] - m[k][j]) * s;
        Self::from_array(q)
    }

    /// Rows of the 3×3 rotation matrix for `v' = v · M`.
    pub(crate) fn rotation_rows(&self) -> [[T; 3]; 3] {
        let [x, y, z, w] = self.data;
        let one = T::ONE;
        let two = T::TWO;
        [
            [
                one - two * (y * y + z * z),
                two * (x * y + z * w),
                two * (x * z - y * w),
            ],
            [
                two * (x * y - z * w),
                one - two * (x * x + z * z),
                two * (y * z + x * w),
            ],
            [
                two * (x * z + y * w),
                two * (y * z - x * w),
                one - two * (x * x + y * y),
            ],
        ]
    }

    /// Hamilton product `self * rhs` (rotate by `rhs`, then by `self`).
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = rhs.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// `(-x, -y, -z, w)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Inverts in place. The zero quaternion becomes the identity.
    pub fn inverse(&mut self) -> &mut Self {
        *self = self.inversed();
        self
    }

    /// Multiplicative inverse, `conjugate / |q|²`. The zero quaternion
    /// yields the identity.
    #[must_use]
    pub fn inversed(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == T::ZERO {
            return Self::IDENTITY;
        }
        Self::from_lanes(self.conjugate().lanes().scale(T::ONE / len_sq))
    }

    /// 4D dot product.
    #[must_use]
    pub fn dot(&self, rhs: &Self) -> T {
        self.lanes().dot4(rhs.lanes())
    }

    /// Squared norm.
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm.
    #[must_use]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales to unit norm in place; the zero quaternion is left unchanged.
    ///
    /// An overflowing squared norm is handled by first dividing by the
    /// largest component magnitude.
    pub fn normalize(&mut self) -> &mut Self {
        let mut len_sq = self.length_squared();
        if len_sq == T::INFINITY {
            let largest = self
                .data
                .iter()
                .fold(T::ZERO, |acc, c| acc.max(c.abs()));
            if largest.is_finite() {
                *self = Self::from_lanes(self.lanes().div(T::Simd::splat(largest)));
                len_sq = self.length_squared();
            }
        }
        if len_sq > T::ZERO && len_sq.is_finite() {
            *self = Self::from_lanes(self.lanes().scale(len_sq.rsqrt()));
        }
        self
    }

    /// Unit-norm copy; the zero quaternion maps to itself.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Rotates `v` by this quaternion, `q v q*`. Assumes unit norm.
    #[must_use]
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        let u = self.xyz();
        let t = u.cross(v) * T::TWO;
        v + t * self.w() + u.cross(t)
    }

    /// `(axis, angle)` of the normalized quaternion, angle in `[0, 2π]`.
    ///
    /// With no rotation the axis is undefined; `+X` is returned.
    #[must_use]
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalized();
        let angle = T::TWO * q.w().acos();
        let sin_half = (T::ONE - q.w() * q.w()).max(T::ZERO).sqrt();
        if sin_half <= T::TOLERANCE {
            return (Vector3::UNIT_X, angle);
        }
        (q.xyz() / sin_half, angle)
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// If the dot product is negative `to` is negated first, so `t = 1`
    /// yields `to` or `-to` (the same rotation). Nearly parallel inputs
    /// (`1 - cos θ <= 0.001`) use linear weights to avoid `0 / sin θ`.
    /// The result is not renormalized.
    #[must_use]
    pub fn slerp(&self, to: &Self, t: T) -> Self {
        let mut cos = self.dot(to);
        let mut end = *to;
        if cos < T::ZERO {
            cos = -cos;
            end = -end;
        }
        let (w0, w1) = if T::ONE - cos > T::from_f32(SLERP_LINEAR_THRESHOLD) {
            let theta = cos.acos();
            let inv_sin = T::ONE / theta.sin();
            (((T::ONE - t) * theta).sin() * inv_sin, (t * theta).sin() * inv_sin)
        } else {
            (T::ONE - t, t)
        };
        Self::from_lanes(self.lanes().scale(w0).add(end.lanes().scale(w1)))
    }

    /// Component-wise `self + (to - self) * t`, not renormalized.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: T) -> Self {
        Self::from_lanes(self.lanes().lerp(to.lanes(), t))
    }

    /// `true` when every component is within [`Scalar::TOLERANCE`].
    #[must_use]
    pub fn near_equal(&self, rhs: &Self) -> bool {
        self.lanes().all_near_eq(rhs.lanes())
    }

    /// `true` when `self` and `rhs` are the same rotation: near-equal up to
    /// sign.
    #[must_use]
    pub fn same_rotation(&self, rhs: &Self) -> bool {
        self.near_equal(rhs) || self.near_equal(&-*rhs)
    }

    /// Converts the element type.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Quaternion<U> {
        Quaternion::from_array(self.data.map(|c| U::from_f64(c.to_f64())))
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_lanes(self.lanes().scale(rhs))
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().add(rhs.lanes()))
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().sub(rhs.lanes()))
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_lanes(self.lanes().neg())
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    fn from(data: [T; 4]) -> Self {
        Self { data }
    }
}
