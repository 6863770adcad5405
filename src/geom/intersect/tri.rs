use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::{IntersectionPoint, Intersects, Line};
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;
use crate::geom::tri::Triangle;

/// Solves `origin + s * dir = v0 + u * e0 + v * e1` for `(u, v, s)` and
/// accepts the solution if it is on the triangle and within the line domain.
///
/// The point is rebuilt from the barycentric coordinates rather than the
/// line parameter, so it lies in the triangle plane up to roundoff.
fn intersect_line_with_tri<S, L>(tri: &Triangle<S>, line: &L) -> Option<Vector3<S>>
where
    S: BaseFloat,
    L: Line<S>,
{
    let direction = line.direction();
    let edge0 = tri.edge(0);
    let edge1 = tri.edge(1);

    let h = direction.cross(edge1);
    let det = edge0.dot(h);

    // in-plane and parallel lines are not resolved
    if det.abs() <= S::min_positive_value() {
        trace!("Line with direction {:?} is parallel to triangle plane", direction);
        return None;
    }

    let inv_det = S::one() / det;
    let s = line.origin() - tri.base_vertex();
    let u = inv_det * s.dot(h);

    if u < S::zero() || u > S::one() {
        return None;
    }

    let q = s.cross(edge0);
    let v = inv_det * direction.dot(q);

    if v < S::zero() || (u + v) > S::one() {
        return None;
    }

    let param = inv_det * edge1.dot(q);

    if !line.contains_param(param) {
        return None;
    }

    Some(tri.point_at(u, v))
}

impl<S: BaseFloat> IntersectionPoint<S, Ray<S>> for Triangle<S> {
    fn intersection_point(&self, ray: &Ray<S>) -> Option<Vector3<S>> {
        intersect_line_with_tri(self, ray)
    }
}

impl<S: BaseFloat> IntersectionPoint<S, LineSegment<S>> for Triangle<S> {
    fn intersection_point(&self, segment: &LineSegment<S>) -> Option<Vector3<S>> {
        intersect_line_with_tri(self, segment)
    }
}

impl<S: BaseFloat> Intersects<Ray<S>> for Triangle<S> {
    fn intersects(&self, ray: &Ray<S>) -> bool {
        intersect_line_with_tri(self, ray).is_some()
    }
}

impl<S: BaseFloat> Intersects<LineSegment<S>> for Triangle<S> {
    fn intersects(&self, segment: &LineSegment<S>) -> bool {
        intersect_line_with_tri(self, segment).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::intersect::{intersection_point, intersects};

    fn unit_triangle() -> Triangle<f64> {
        Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn intersect_ray_with_tri() {
        let ray = Ray::new(Vector3::<f32>::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        let tri = Triangle::new(
            Vector3::new(-1.0, -1.0, 100.0),
            Vector3::new(1.0, -1.0, 100.0),
            Vector3::new(0.0, 1.0, 200.0),
        );

        assert!(intersects(&tri, &ray));
        assert_eq!(intersection_point(&tri, &ray), Some(Vector3::new(0.0, 0.0, 150.0)));
    }

    #[test]
    fn intersect_ray_with_tri_and_miss() {
        let ray = Ray::new(Vector3::<f32>::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));

        let tri = Triangle::new(
            Vector3::new(-1.0, -1.0, 100.0),
            Vector3::new(1.0, -1.0, 100.0),
            Vector3::new(0.0, 1.0, 200.0),
        );

        assert!(!intersects(&tri, &ray));
        assert_eq!(intersection_point(&tri, &ray), None);
    }

    #[test]
    fn segment_too_short_misses() {
        let tri = unit_triangle();
        let short = LineSegment::new(Vector3::new(0.25, 0.25, 1.0), Vector3::new(0.25, 0.25, 0.5));
        let touching = LineSegment::new(Vector3::new(0.25, 0.25, 1.0), Vector3::new(0.25, 0.25, 0.0));

        assert!(!intersects(&tri, &short));
        assert_eq!(intersection_point(&tri, &touching), Some(Vector3::new(0.25, 0.25, 0.0)));
    }

    #[test]
    fn hits_from_both_sides() {
        let tri = unit_triangle();
        let from_above = Ray::new(Vector3::new(0.1, 0.2, 3.0), Vector3::new(0.0, 0.0, -1.0));
        let from_below = Ray::new(Vector3::new(0.1, 0.2, -3.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(intersects(&tri, &from_above));
        assert!(intersects(&tri, &from_below));
    }

    #[test]
    fn ray_starting_on_triangle_hits() {
        let tri = unit_triangle();
        let ray = Ray::new(Vector3::new(0.5, 0.25, 0.0), Vector3::new(0.3, 0.1, 1.0));

        assert_eq!(intersection_point(&tri, &ray), Some(Vector3::new(0.5, 0.25, 0.0)));
    }

    #[test]
    fn in_plane_and_parallel_lines_are_not_reported() {
        let tri = unit_triangle();
        let in_plane = LineSegment::new(Vector3::new(-1.0, 0.25, 0.0), Vector3::new(1.0, 0.25, 0.0));
        let parallel = LineSegment::new(Vector3::new(-1.0, 1.0, 0.5), Vector3::new(1.0, 1.0, 0.5));

        assert!(!intersects(&tri, &in_plane));
        assert!(!intersects(&tri, &parallel));
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let ray = Ray::new(Vector3::new(0.3, 0.1, 2.0), Vector3::new(-0.05, 0.2, -1.7));
        let first = intersection_point(&unit_triangle(), &ray);

        for _ in 0..10 {
            assert_eq!(intersection_point(&unit_triangle(), &ray), first);
        }
        assert!(first.is_some());
    }
}
