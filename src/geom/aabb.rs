use ::cgmath::{BaseFloat, Vector3};

use super::vec::scalar;

use std::fmt;

/// An axis-aligned bounding box in 3D.
///
/// A box is built by expanding the empty box with points or other boxes.
/// The empty box has max at negative infinity and min at positive
/// infinity, so that any expansion replaces both corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<S> {
    pub min: Vector3<S>,
    pub max: Vector3<S>,
}

impl<S: BaseFloat> Aabb<S> {
    /// The box that contains nothing.
    pub fn empty() -> Aabb<S> {
        Aabb {
            min: Vector3::new(S::infinity(), S::infinity(), S::infinity()),
            max: Vector3::new(S::neg_infinity(), S::neg_infinity(), S::neg_infinity()),
        }
    }

    /// Creates the smallest aabb that encloses all of the points returned
    /// by the given iterator.
    /// Returns the empty aabb if the given iterator was empty.
    pub fn from_points<P>(points: P) -> Aabb<S>
    where
        P: IntoIterator<Item = Vector3<S>>,
    {
        points.into_iter().fold(Aabb::empty(), |mut aabb, p| {
            aabb.expand_by(p);
            aabb
        })
    }

    /// Returns the smallest aabb that encloses all of the aabb in the given iterator.
    /// Returns the empty aabb if the given iterator was empty.
    pub fn union<A>(aabbs: A) -> Aabb<S>
    where
        A: IntoIterator<Item = Aabb<S>>,
    {
        aabbs.into_iter().fold(Aabb::empty(), |mut acc, aabb| {
            acc.expand_by_aabb(&aabb);
            acc
        })
    }

    /// Grows the box so it also contains the given point.
    pub fn expand_by(&mut self, p: Vector3<S>) {
        self.min = Vector3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Vector3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    /// Grows the box so it also contains the other box.
    /// Expanding by an empty box changes nothing.
    pub fn expand_by_aabb(&mut self, other: &Aabb<S>) {
        if other.is_empty() {
            return;
        }

        self.expand_by(other.min);
        self.expand_by(other.max);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the box, or `None` for the empty box.
    pub fn center(&self) -> Option<Vector3<S>> {
        if self.is_empty() {
            None
        } else {
            Some((self.min + self.max) * scalar(0.5))
        }
    }

    pub fn size(&self) -> Vector3<S> {
        self.max - self.min
    }

    pub fn half_size(&self) -> Vector3<S> {
        self.size() * scalar(0.5)
    }

    pub fn volume(&self) -> S {
        if self.is_empty() {
            return S::zero();
        }

        let dims = self.size();
        dims.x * dims.y * dims.z
    }

    fn is_point_outside(&self, point: Vector3<S>) -> bool {
        point.x < self.min.x || point.x > self.max.x ||
            point.y < self.min.y || point.y > self.max.y ||
            point.z < self.min.z || point.z > self.max.z
    }

    /// Checks if the point is inside the box, points exactly on a face,
    /// edge or corner count as inside.
    pub fn contains(&self, point: Vector3<S>) -> bool {
        !self.is_point_outside(point)
    }

    pub fn is_aabb_inside(&self, other: &Aabb<S>) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// The corner that lies furthest in the opposite direction of `dir`.
    pub fn nearest_corner(&self, dir: Vector3<S>) -> Vector3<S> {
        Vector3::new(
            if dir.x < S::zero() { self.max.x } else { self.min.x },
            if dir.y < S::zero() { self.max.y } else { self.min.y },
            if dir.z < S::zero() { self.max.z } else { self.min.z },
        )
    }

    /// The corner that lies furthest in the direction of `dir`.
    pub fn farthest_corner(&self, dir: Vector3<S>) -> Vector3<S> {
        Vector3::new(
            if dir.x < S::zero() { self.min.x } else { self.max.x },
            if dir.y < S::zero() { self.min.y } else { self.max.y },
            if dir.z < S::zero() { self.min.z } else { self.max.z },
        )
    }
}

impl<S: fmt::Debug> fmt::Display for Aabb<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "box: min = {:?}, max = {:?}", self.min, self.max)
    }
}
