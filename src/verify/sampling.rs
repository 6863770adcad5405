use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};
use ::rand::Rng;

use crate::geom::vec::scalar;

/// Uniformly distributed scalar in `[0, 1)`.
///
/// The draw is made in `f64`, so for `f32` values just below one round up
/// and the range is `[0, 1]`.
pub fn random_scalar<S, R>(rng: &mut R) -> S
where
    S: BaseFloat,
    R: Rng,
{
    scalar(rng.gen::<f64>())
}

/// Vector with each component distributed like `random_scalar`.
pub fn random_vec<S, R>(rng: &mut R) -> Vector3<S>
where
    S: BaseFloat,
    R: Rng,
{
    Vector3::new(
        random_scalar(rng),
        random_scalar(rng),
        random_scalar(rng)
    )
}

/// Normalized `random_vec`, hence a direction in the positive octant.
/// Not uniform on the sphere section.
pub fn random_direction<S, R>(rng: &mut R) -> Vector3<S>
where
    S: BaseFloat,
    R: Rng,
{
    loop {
        let v: Vector3<S> = random_vec(rng);
        // retry on the rare draws too short to normalize
        if v.magnitude2() > S::epsilon() {
            return v.normalize();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;
    use ::rand::rngs::mock::StepRng;

    #[test]
    fn samples_are_in_unit_cube() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let v: Vector3<f32> = random_vec(&mut rng);
            assert!(v.x >= 0.0 && v.x <= 1.0, "{:?} not in unit cube", v);
            assert!(v.y >= 0.0 && v.y <= 1.0, "{:?} not in unit cube", v);
            assert!(v.z >= 0.0 && v.z <= 1.0, "{:?} not in unit cube", v);

            let d: Vector3<f64> = random_direction(&mut rng);
            assert!((d.magnitude() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn largest_draw_rounds_up_only_in_f32() {
        // every draw is the largest f64 below one
        let mut rng = StepRng::new(u64::max_value(), 0);

        let double: f64 = random_scalar(&mut rng);
        let single: f32 = random_scalar(&mut rng);

        assert!(double < 1.0);
        assert_eq!(single, 1.0);
    }

    #[test]
    fn same_seed_same_samples() {
        let mut rng0 = StdRng::seed_from_u64(42);
        let mut rng1 = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v0: Vector3<f64> = random_vec(&mut rng0);
            let v1: Vector3<f64> = random_vec(&mut rng1);
            assert_eq!(v0, v1);
        }
    }
}
