use ::cgmath::{BaseFloat, Vector3};
use ::rand::Rng;

use super::sampling::{random_scalar, random_vec};
use super::{Mismatch, Tally};
use crate::geom::intersect::{intersection_point, intersects};
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;
use crate::geom::tri::Triangle;
use crate::geom::vec::{equivalent, scalar};

/// Like `Tally::check`, but also requires a hit to be at the expected point.
fn check_point<S: BaseFloat>(tally: &mut Tally, expected: bool, actual: Option<Vector3<S>>, expected_point: Vector3<S>) -> Option<Mismatch> {
    match actual {
        Some(point) if expected && !equivalent(point, expected_point) => {
            tally.record(Mismatch::NotEquivalent);
            Some(Mismatch::NotEquivalent)
        }
        _ => tally.check(expected, actual.is_some()),
    }
}

/// Picks a random triangle and a point `v0 + u e0 + v e1` in its plane with
/// `u` and `v` in `[-2, 2)`, then queries lines through that point.
///
/// The segment passes the point at parameter `t` in `[-2, 2)`, the ray
/// starts at the same position as the segment. A hit is expected iff the
/// point is on the triangle and `t` is inside the domain of the line.
pub fn random_trials<S, R>(rng: &mut R, trials: u32) -> Tally
where
    S: BaseFloat,
    R: Rng,
{
    let mut tally = Tally::new(trials);
    let two = scalar::<S>(2.0);
    let four = scalar::<S>(4.0);

    for trial in 0..trials {
        let tri = Triangle::new(random_vec(rng), random_vec(rng), random_vec(rng));

        let u = four * random_scalar::<S, R>(rng) - two;
        let v = four * random_scalar::<S, R>(rng) - two;
        let t = four * random_scalar::<S, R>(rng) - two;

        let isect_point = tri.point_at(u, v);
        let on_triangle = S::zero() <= u && S::zero() <= v && u + v <= S::one();

        let direction: Vector3<S> = random_vec(rng);
        let origin = isect_point - direction * t;

        let segment = LineSegment::new(origin, isect_point + direction * (S::one() - t));
        let expected = on_triangle && S::zero() <= t && t <= S::one();
        if let Some(mismatch) = check_point(&mut tally, expected, intersection_point(&tri, &segment), isect_point) {
            debug!(
                "Failed line segment intersection test #{}: {}!\nu = {:?}, v = {:?}, t = {:?}\n{}\n{}",
                trial, mismatch, u, v, t, tri, segment
            );
        }

        let ray = Ray::new(origin, direction);
        let expected = on_triangle && S::zero() <= t;
        if let Some(mismatch) = check_point(&mut tally, expected, intersection_point(&tri, &ray), isect_point) {
            debug!(
                "Failed ray intersection test #{}: {}!\nu = {:?}, v = {:?}, t = {:?}\n{}\n{}",
                trial, mismatch, u, v, t, tri, ray
            );
        }
    }

    tally
}

/// A query against the unit triangle, from `(0, 0, 1)` along a direction
/// (rays) or towards an end point (segments).
struct BoundaryCase {
    ray: bool,
    to: [f64; 3],
    hit: bool,
}

const BOUNDARY_CASES: [BoundaryCase; 11] = [
    BoundaryCase { ray: true, to: [0.1, 0.1, -1.0], hit: true },
    // straight down onto the vertex at the origin
    BoundaryCase { ray: true, to: [0.0, 0.0, -1.0], hit: true },
    BoundaryCase { ray: false, to: [0.1, 0.1, -1.0], hit: true },
    BoundaryCase { ray: false, to: [0.0, 0.0, -1.0], hit: true },
    // through the middle of each edge
    BoundaryCase { ray: false, to: [0.0, 1.0, -1.0], hit: true },
    BoundaryCase { ray: false, to: [1.0, 0.0, -1.0], hit: true },
    BoundaryCase { ray: false, to: [1.0, 1.0, -1.0], hit: true },
    // slightly beyond the hypotenuse
    BoundaryCase { ray: false, to: [1.0, 1.0, -0.9], hit: false },
    // slightly outside of the legs
    BoundaryCase { ray: false, to: [0.0, -0.1, -1.0], hit: false },
    BoundaryCase { ray: false, to: [-0.1, -0.1, -1.0], hit: false },
    BoundaryCase { ray: false, to: [-0.1, 0.0, -1.0], hit: false },
];

/// Runs hand-crafted queries with lines through the edges and vertices of
/// the unit triangle and returns the one-based number of the first case
/// that was answered wrong.
pub fn failed_boundary_case<S: BaseFloat>() -> Option<usize> {
    let point = |c: [f64; 3]| Vector3::new(scalar::<S>(c[0]), scalar::<S>(c[1]), scalar::<S>(c[2]));

    let tri = Triangle::new(point([0.0, 0.0, 0.0]), point([1.0, 0.0, 0.0]), point([0.0, 1.0, 0.0]));
    let origin = point([0.0, 0.0, 1.0]);

    BOUNDARY_CASES.iter()
        .position(|case| {
            let hit = if case.ray {
                intersects(&tri, &Ray::new(origin, point(case.to)))
            } else {
                intersects(&tri, &LineSegment::new(origin, point(case.to)))
            };
            hit != case.hit
        })
        .map(|idx| idx + 1)
}
