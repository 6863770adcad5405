use ::cgmath::{BaseFloat, Vector3};
use ::rand::Rng;

use super::sampling::{random_direction, random_scalar, random_vec};
use super::Tally;
use crate::geom::intersect::intersects;
use crate::geom::ray::Ray;
use crate::geom::segment::LineSegment;
use crate::geom::sphere::Sphere;
use crate::geom::vec::{perpendicular, scalar};

/// A random sphere and a probe point at distance `t` in `[0, 4)` from
/// its center, the line through the probe point will be closest to the
/// center there.
struct Probe<S> {
    sphere: Sphere<S>,
    offset: Vector3<S>,
    t: S,
    base: Vector3<S>,
}

impl<S: BaseFloat> Probe<S> {
    fn random<R: Rng>(rng: &mut R) -> Probe<S> {
        let center = random_vec(rng);
        let radius = scalar::<S>(2.0) * random_scalar::<S, R>(rng);
        let sphere = Sphere::new(center, radius);

        let offset = random_direction(rng);
        let t = scalar::<S>(4.0) * random_scalar::<S, R>(rng);
        let base = center + offset * t;

        Probe { sphere, offset, t, base }
    }

    fn expect_hit(&self) -> bool {
        self.t <= self.sphere.radius
    }
}

/// Queries a segment and a ray starting at `start`, both must hit iff the
/// probe point is within the sphere.
fn check_lines<S: BaseFloat>(tally: &mut Tally, trial: u32, probe: &Probe<S>, start: Vector3<S>, end: Vector3<S>) {
    let expected = probe.expect_hit();

    let segment = LineSegment::new(start, end);
    if let Some(mismatch) = tally.check(expected, intersects(&probe.sphere, &segment)) {
        debug!(
            "Failed sphere line intersection test #{}: {}!\nt = {:?}\n{}\n{}",
            trial, mismatch, probe.t, probe.sphere, segment
        );
    }

    let ray = Ray::new(start, end - start);
    if let Some(mismatch) = tally.check(expected, intersects(&probe.sphere, &ray)) {
        debug!(
            "Failed sphere ray intersection test #{}: {}!\nt = {:?}\n{}\n{}",
            trial, mismatch, probe.t, probe.sphere, ray
        );
    }
}

/// Lines crossing the probe point perpendicular to the offset from the
/// center, starting up to four units to one side and ending up to four
/// units on the other side.
pub fn broadside_trials<S, R>(rng: &mut R, trials: u32) -> Tally
where
    S: BaseFloat,
    R: Rng,
{
    let mut tally = Tally::new(trials);
    let four = scalar::<S>(4.0);

    for trial in 0..trials {
        let probe = Probe::<S>::random(rng);

        let per = perpendicular(probe.offset);
        let start = probe.base + per * (four * random_scalar::<S, R>(rng));
        let end = probe.base - per * (four * random_scalar::<S, R>(rng));

        check_lines(&mut tally, trial, &probe, start, end);
    }

    tally
}

/// Lines starting exactly at the probe point and leading away from the
/// center for up to two units.
pub fn endpoint_trials<S, R>(rng: &mut R, trials: u32) -> Tally
where
    S: BaseFloat,
    R: Rng,
{
    let mut tally = Tally::new(trials);
    let two = scalar::<S>(2.0);

    for trial in 0..trials {
        let probe = Probe::<S>::random(rng);

        let start = probe.base;
        let end = probe.base + probe.offset * (two * random_scalar::<S, R>(rng));

        check_lines(&mut tally, trial, &probe, start, end);
    }

    tally
}

#[cfg(test)]
mod test {
    use super::*;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    #[test]
    fn broadside_mostly_agrees() {
        let mut rng = StdRng::seed_from_u64(5);
        let tally = broadside_trials::<f32, _>(&mut rng, 5000);
        assert!(!tally.exceeds(0.01), "Too many failures: {:?}", tally);
    }

    #[test]
    fn endpoint_mostly_agrees() {
        let mut rng = StdRng::seed_from_u64(5);
        let tally = endpoint_trials::<f64, _>(&mut rng, 5000);
        assert!(!tally.exceeds(0.01), "Too many failures: {:?}", tally);
    }
}
