// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `bytemuck` casts for uploading math types to GPU buffers.
//!
//! Implemented per concrete scalar: the aligned 4-lane types are only free
//! of padding when four scalars fill the alignment exactly.
#![allow(unsafe_code)]

use bytemuck::{Pod, Zeroable};

use crate::color::Color;
use crate::matrix::{Matrix3x3, Matrix4x4};
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};

macro_rules! impl_pod {
    ($scalar:ty => $($ty:ident),+ $(,)?) => {
        $(
            // SAFETY: `#[repr(C)]` wrappers around arrays of `$scalar` with
            // no padding; every bit pattern is a valid float.
            unsafe impl Zeroable for $ty<$scalar> {}
            // SAFETY: as above.
            unsafe impl Pod for $ty<$scalar> {}
        )+
    };
}

impl_pod!(f32 => Vector2, Vector3, Vector4, Matrix3x3, Matrix4x4, Quaternion, Color);
impl_pod!(f64 => Vector2, Vector3, Vector4, Matrix3x3, Matrix4x4, Quaternion, Color);
