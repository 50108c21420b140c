// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::{Scalar, Vector3};

/// Line segment between two endpoints. Not normalized in any way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line<T> {
    begin: Vector3<T>,
    end: Vector3<T>,
}

impl<T: Scalar> Line<T> {
    /// Segment from `begin` to `end`.
    #[must_use]
    pub const fn new(begin: Vector3<T>, end: Vector3<T>) -> Self {
        Self { begin, end }
    }

    /// First endpoint.
    #[must_use]
    pub const fn begin(&self) -> Vector3<T> {
        self.begin
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> Vector3<T> {
        self.end
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> T {
        self.begin.distance(self.end)
    }

    /// Unit vector from `begin` to `end`; zero for a degenerate segment.
    #[must_use]
    pub fn direction(&self) -> Vector3<T> {
        self.begin.direction_to(self.end)
    }

    /// Point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Vector3<T> {
        self.begin.lerp(self.end, T::HALF)
    }

    /// Point on the segment nearest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vector3<T>) -> Vector3<T> {
        let span = self.end - self.begin;
        let len_sq = span.length_squared();
        if len_sq == T::ZERO {
            return self.begin;
        }
        let t = ((point - self.begin).dot(span) / len_sq).saturate();
        self.begin + span * t
    }
}
