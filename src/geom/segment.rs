use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::aabb::Aabb;
use super::spatial::Spatial;
use super::vec::scalar;

use std::fmt;

/// The line segment `start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<S> {
    pub start: Vector3<S>,
    pub end: Vector3<S>,
}

impl<S: BaseFloat> LineSegment<S> {
    pub fn new(start: Vector3<S>, end: Vector3<S>) -> LineSegment<S> {
        LineSegment { start, end }
    }

    pub fn set(&mut self, start: Vector3<S>, end: Vector3<S>) {
        self.start = start;
        self.end = end;
    }

    /// Unnormalized direction, spanning the whole segment.
    pub fn direction(&self) -> Vector3<S> {
        self.end - self.start
    }

    pub fn center(&self) -> Vector3<S> {
        (self.start + self.end) * scalar(0.5)
    }

    pub fn length(&self) -> S {
        self.direction().magnitude()
    }

    pub fn point_at(&self, t: S) -> Vector3<S> {
        self.start + self.direction() * t
    }

    /// Gets the point on the segment that is closest to the given point.
    pub fn nearest_point_to(&self, point: Vector3<S>) -> Vector3<S> {
        let dir = self.direction();
        let len2 = dir.magnitude2();
        if len2 <= S::zero() {
            return self.start;
        }

        let t = dir.dot(point - self.start) / len2;
        self.point_at(t.max(S::zero()).min(S::one()))
    }
}

impl<S: BaseFloat> Spatial<S> for LineSegment<S> {
    fn bounds(&self) -> Aabb<S> {
        Aabb::from_points([self.start, self.end].iter().cloned())
    }
}

impl<S: fmt::Debug> fmt::Display for LineSegment<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line segment: start = {:?}, end = {:?}", self.start, self.end)
    }
}
