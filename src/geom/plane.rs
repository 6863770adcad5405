use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use std::fmt;

/// A plane given by the points x with `normal . x + dist = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<S> {
    pub normal: Vector3<S>,
    pub dist: S,
}

impl<S: BaseFloat> Plane<S> {
    pub fn new(normal: Vector3<S>, dist: S) -> Plane<S> {
        Plane { normal, dist }
    }

    /// Plane through the three points, with the normal oriented like the
    /// normal of the triangle `(p0, p1, p2)`.
    pub fn from_points(p0: Vector3<S>, p1: Vector3<S>, p2: Vector3<S>) -> Plane<S> {
        let normal = (p1 - p0).cross(p2 - p0).normalize();
        Plane {
            normal,
            dist: -normal.dot(p0),
        }
    }

    /// Signed distance, positive on the side the normal points to.
    /// Only a true distance if the normal is normalized.
    pub fn distance_to(&self, point: Vector3<S>) -> S {
        self.normal.dot(point) + self.dist
    }
}

impl<S: fmt::Debug> fmt::Display for Plane<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "plane: normal = {:?}, dist = {:?}", self.normal, self.dist)
    }
}
