use ::cgmath::{BaseFloat, Vector3};

use super::{Intersects, Line};
use crate::geom::aabb::Aabb;
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;
use crate::geom::sphere::Sphere;

/// Slab test, clips the line domain against the parameter interval in
/// which the line is between the two planes of each axis.
///
/// All bounds are inclusive, a line grazing a face, edge or corner hits.
fn intersect_line_with_aabb<S, L>(aabb: &Aabb<S>, line: &L) -> bool
where
    S: BaseFloat,
    L: Line<S>,
{
    if aabb.is_empty() {
        return false;
    }

    let origin = line.origin();
    let direction = line.direction();

    let mut near = S::zero();
    let mut far = line.max_param();

    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        let (min, max) = (aabb.min[axis], aabb.max[axis]);

        // parallel to the slab, either always or never inside it
        if d.abs() <= S::min_positive_value() {
            if o < min || o > max {
                return false;
            }
            continue;
        }

        let inv_d = S::one() / d;
        let mut enter = (min - o) * inv_d;
        let mut exit = (max - o) * inv_d;
        if enter > exit {
            ::std::mem::swap(&mut enter, &mut exit);
        }

        near = near.max(enter);
        far = far.min(exit);

        if near > far {
            return false;
        }
    }

    true
}

impl<S: BaseFloat> Intersects<Ray<S>> for Aabb<S> {
    fn intersects(&self, ray: &Ray<S>) -> bool {
        intersect_line_with_aabb(self, ray)
    }
}

impl<S: BaseFloat> Intersects<LineSegment<S>> for Aabb<S> {
    fn intersects(&self, segment: &LineSegment<S>) -> bool {
        intersect_line_with_aabb(self, segment)
    }
}

impl<S: BaseFloat> Intersects<Vector3<S>> for Aabb<S> {
    fn intersects(&self, point: &Vector3<S>) -> bool {
        self.contains(*point)
    }
}

impl<S: BaseFloat> Intersects<Aabb<S>> for Aabb<S> {
    fn intersects(&self, other: &Aabb<S>) -> bool {
        !self.is_empty() && !other.is_empty() &&
            self.min.x <= other.max.x && self.max.x >= other.min.x &&
            self.min.y <= other.max.y && self.max.y >= other.min.y &&
            self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

impl<S: BaseFloat> Intersects<Sphere<S>> for Aabb<S> {
    fn intersects(&self, sphere: &Sphere<S>) -> bool {
        sphere.intersects(self)
    }
}
