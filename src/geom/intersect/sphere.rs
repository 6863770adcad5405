use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::{Intersects, Line};
use crate::geom::aabb::Aabb;
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;
use crate::geom::sphere::Sphere;

/// Checks if some point of the line within its domain is inside or on
/// the sphere, by clipping the roots of
/// `|origin + s * dir - center|^2 = radius^2` to the line domain.
fn intersect_line_with_sphere<S, L>(sphere: &Sphere<S>, line: &L) -> bool
where
    S: BaseFloat,
    L: Line<S>,
{
    if sphere.is_empty() {
        return false;
    }

    let offset = line.origin() - sphere.center;
    let c = offset.magnitude2() - sphere.radius2();

    // starts inside or on the surface
    if c <= S::zero() {
        return true;
    }

    let direction = line.direction();
    let a = direction.magnitude2();
    if a <= S::zero() {
        trace!("Degenerate line starting outside of sphere, no intersection");
        return false;
    }

    // half of the linear coefficient, saves the factors of two and four
    let b = direction.dot(offset);
    let discriminant = b * b - a * c;

    if discriminant < S::zero() {
        return false;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / a;
    let far = (-b + root) / a;

    near <= line.max_param() && far >= S::zero()
}

impl<S: BaseFloat> Intersects<Ray<S>> for Sphere<S> {
    fn intersects(&self, ray: &Ray<S>) -> bool {
        intersect_line_with_sphere(self, ray)
    }
}

impl<S: BaseFloat> Intersects<LineSegment<S>> for Sphere<S> {
    fn intersects(&self, segment: &LineSegment<S>) -> bool {
        intersect_line_with_sphere(self, segment)
    }
}

impl<S: BaseFloat> Intersects<Vector3<S>> for Sphere<S> {
    fn intersects(&self, point: &Vector3<S>) -> bool {
        self.contains(*point)
    }
}

impl<S: BaseFloat> Intersects<Sphere<S>> for Sphere<S> {
    fn intersects(&self, other: &Sphere<S>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let reach = self.radius + other.radius;
        self.center.distance2(other.center) <= reach * reach
    }
}

impl<S: BaseFloat> Intersects<Aabb<S>> for Sphere<S> {
    fn intersects(&self, aabb: &Aabb<S>) -> bool {
        if self.is_empty() || aabb.is_empty() {
            return false;
        }

        let c = self.center;
        let closest = Vector3::new(
            c.x.max(aabb.min.x).min(aabb.max.x),
            c.y.max(aabb.min.y).min(aabb.max.y),
            c.z.max(aabb.min.z).min(aabb.max.z),
        );

        c.distance2(closest) <= self.radius2()
    }
}
