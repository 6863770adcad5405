use ::cgmath::{BaseFloat, Vector3};
use ::rand::Rng;

use super::sampling::random_vec;
use super::Tally;
use crate::geom::aabb::Aabb;
use crate::geom::intersect::intersects;
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;

/// Lines from a random base point leading away from the center of a
/// random box.
///
/// Since the box is convex and contains its center, moving away from the
/// center never enters the box, so a line hits iff its base point is
/// already inside.
pub fn random_trials<S, R>(rng: &mut R, trials: u32) -> Tally
where
    S: BaseFloat,
    R: Rng,
{
    let mut tally = Tally::new(trials);

    for trial in 0..trials {
        let mut aabb = Aabb::empty();
        aabb.expand_by(random_vec(rng));
        aabb.expand_by(random_vec(rng));

        let center = aabb.center().expect("Box expanded by points cannot be empty");

        let base: Vector3<S> = random_vec(rng);
        let direction = base - center;
        let expected = intersects(&aabb, &base);

        let segment = LineSegment::new(base, base + direction);
        if let Some(mismatch) = tally.check(expected, intersects(&aabb, &segment)) {
            debug!(
                "Failed box line intersection test #{}: {}!\n{}\n{}",
                trial, mismatch, aabb, segment
            );
        }

        let ray = Ray::new(base, direction);
        if let Some(mismatch) = tally.check(expected, intersects(&aabb, &ray)) {
            debug!(
                "Failed box ray intersection test #{}: {}!\n{}\n{}",
                trial, mismatch, aabb, ray
            );
        }
    }

    tally
}
