use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use std::fmt;

/// A half-infinite line `origin + s * direction` for `s >= 0`.
///
/// The direction does not need to be normalized, but must not be zero
/// for queries to be meaningful.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<S> {
    pub origin: Vector3<S>,
    pub direction: Vector3<S>,
}

impl<S: BaseFloat> Ray<S> {
    pub fn new(origin: Vector3<S>, direction: Vector3<S>) -> Ray<S> {
        Ray { origin, direction }
    }

    pub fn set(&mut self, origin: Vector3<S>, direction: Vector3<S>) {
        self.origin = origin;
        self.direction = direction;
    }

    pub fn point_at(&self, s: S) -> Vector3<S> {
        self.origin + self.direction * s
    }

    /// Gets the point on the ray that is closest to the given point.
    pub fn nearest_point_to(&self, point: Vector3<S>) -> Vector3<S> {
        let len2 = self.direction.magnitude2();
        if len2 <= S::zero() {
            return self.origin;
        }

        let s = self.direction.dot(point - self.origin) / len2;
        self.point_at(s.max(S::zero()))
    }
}

impl<S: fmt::Debug> fmt::Display for Ray<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ray: origin = {:?}, direction = {:?}", self.origin, self.direction)
    }
}
