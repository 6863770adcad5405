//! Intersection queries between lines and shapes.
//!
//! Every supported pair of primitives implements `Intersects`, pairs
//! that also yield a point implement `IntersectionPoint`. The free
//! functions `intersects` and `intersection_point` dispatch on the
//! argument types, so a query reads the same for all shapes:
//!
//! ```
//! use simgeom::{intersects, intersection_point, Triangle, Ray};
//! use cgmath::Vector3;
//!
//! let tri = Triangle::new(
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0)
//! );
//! let ray = Ray::new(Vector3::new(0.25, 0.25, 1.0), Vector3::new(0.0, 0.0, -1.0));
//!
//! assert!(intersects(&tri, &ray));
//! assert_eq!(intersection_point(&tri, &ray), Some(Vector3::new(0.25, 0.25, 0.0)));
//! ```
//!
//! A line lying in or parallel to the plane of a triangle is never reported
//! as intersecting it, even if it runs across the triangle.

mod aabb;
mod plane;
mod sphere;
mod tri;

use ::cgmath::{BaseFloat, Vector3};

use super::ray::Ray;
use super::segment::LineSegment;

/// A query whether two primitives share at least one point.
pub trait Intersects<Rhs: ?Sized> {
    fn intersects(&self, other: &Rhs) -> bool;
}

/// A query for the point where a line meets a surface.
pub trait IntersectionPoint<S, Rhs: ?Sized> {
    fn intersection_point(&self, other: &Rhs) -> Option<Vector3<S>>;
}

/// Checks if `a` and `b` share at least one point.
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Intersects<B>,
{
    a.intersects(b)
}

/// Gets the point where the line `b` meets the surface `a`, if any.
pub fn intersection_point<S, A, B>(a: &A, b: &B) -> Option<Vector3<S>>
where
    A: IntersectionPoint<S, B>,
{
    a.intersection_point(b)
}

/// A parameterized line `origin + s * direction`, restricted to
/// `0 <= s <= max_param()`.
pub trait Line<S: BaseFloat> {
    fn origin(&self) -> Vector3<S>;

    fn direction(&self) -> Vector3<S>;

    fn max_param(&self) -> S;

    fn contains_param(&self, s: S) -> bool {
        s >= S::zero() && s <= self.max_param()
    }
}

impl<S: BaseFloat> Line<S> for Ray<S> {
    fn origin(&self) -> Vector3<S> {
        self.origin
    }

    fn direction(&self) -> Vector3<S> {
        self.direction
    }

    fn max_param(&self) -> S {
        S::infinity()
    }
}

impl<S: BaseFloat> Line<S> for LineSegment<S> {
    fn origin(&self) -> Vector3<S> {
        self.start
    }

    fn direction(&self) -> Vector3<S> {
        LineSegment::direction(self)
    }

    fn max_param(&self) -> S {
        S::one()
    }
}
