use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::{IntersectionPoint, Intersects, Line};
use crate::geom::plane::Plane;
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;

fn intersect_line_with_plane<S, L>(plane: &Plane<S>, line: &L) -> Option<Vector3<S>>
where
    S: BaseFloat,
    L: Line<S>,
{
    let direction = line.direction();
    let origin = line.origin();

    let denom = plane.normal.dot(direction);
    if denom.abs() <= S::min_positive_value() {
        return None;
    }

    let param = -plane.distance_to(origin) / denom;
    if line.contains_param(param) {
        Some(origin + direction * param)
    } else {
        None
    }
}

impl<S: BaseFloat> IntersectionPoint<S, Ray<S>> for Plane<S> {
    fn intersection_point(&self, ray: &Ray<S>) -> Option<Vector3<S>> {
        intersect_line_with_plane(self, ray)
    }
}

impl<S: BaseFloat> IntersectionPoint<S, LineSegment<S>> for Plane<S> {
    fn intersection_point(&self, segment: &LineSegment<S>) -> Option<Vector3<S>> {
        intersect_line_with_plane(self, segment)
    }
}

impl<S: BaseFloat> Intersects<Ray<S>> for Plane<S> {
    fn intersects(&self, ray: &Ray<S>) -> bool {
        intersect_line_with_plane(self, ray).is_some()
    }
}

impl<S: BaseFloat> Intersects<LineSegment<S>> for Plane<S> {
    fn intersects(&self, segment: &LineSegment<S>) -> bool {
        intersect_line_with_plane(self, segment).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::intersect::{intersection_point, intersects};

    fn ground() -> Plane<f64> {
        Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.0)
    }

    #[test]
    fn ray_hits_ground() {
        let ray = Ray::new(Vector3::new(1.0, 2.0, 4.0), Vector3::new(1.0, 0.0, -2.0));
        assert_eq!(intersection_point(&ground(), &ray), Some(Vector3::new(3.0, 2.0, 0.0)));
    }

    #[test]
    fn segment_above_ground_misses() {
        let segment = LineSegment::new(Vector3::new(1.0, 2.0, 4.0), Vector3::new(1.0, 2.0, 1.0));
        assert!(!intersects(&ground(), &segment));
        assert!(intersects(&ground(), &Ray::new(segment.start, segment.direction())));
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vector3::new(1.0, 2.0, 4.0), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(intersection_point(&ground(), &ray), None);
    }
}
