//!
//! Helpers on top of `cgmath::Vector3` that are shared by all primitives:
//! tolerant comparison and construction of perpendicular directions.
//!

use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};
use ::num_traits::NumCast;

/// Converts a literal into the scalar type `S`.
///
/// Used for the handful of constants that generic code needs, e.g. the
/// ranges random configurations are drawn from.
pub fn scalar<S: BaseFloat>(value: f64) -> S {
    <S as NumCast>::from(value).unwrap_or_else(S::nan)
}

/// Relative and absolute tolerance used by `equivalent`, a hundred
/// machine epsilons of `S`.
pub fn tolerance<S: BaseFloat>() -> S {
    scalar::<S>(100.0) * S::epsilon()
}

/// Sum of absolute components.
pub fn norm1<S: BaseFloat>(v: Vector3<S>) -> S {
    v.x.abs() + v.y.abs() + v.z.abs()
}

/// Checks if the two vectors are equal up to the given relative and
/// absolute tolerance.
///
/// The relative part scales with the magnitude of both vectors, the
/// absolute part keeps vectors close to the origin comparable.
pub fn equivalent_with<S: BaseFloat>(a: Vector3<S>, b: Vector3<S>, rtol: S, atol: S) -> bool {
    norm1(a - b) < rtol * (norm1(a) + norm1(b)) + atol
}

/// Checks if the two vectors are equal up to roundoff, see `tolerance`.
pub fn equivalent<S: BaseFloat>(a: Vector3<S>, b: Vector3<S>) -> bool {
    let tol = tolerance::<S>();
    equivalent_with(a, b, tol, tol)
}

/// Gets some unit vector perpendicular to `v`.
///
/// The result is the normalized cross product with the coordinate axis
/// along which `v` is shortest, so it is well conditioned for any
/// non-zero input. The zero vector maps to the zero vector.
pub fn perpendicular<S: BaseFloat>(v: Vector3<S>) -> Vector3<S> {
    let (abs_x, abs_y, abs_z) = (v.x.abs(), v.y.abs(), v.z.abs());

    let axis = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::unit_x()
    } else if abs_y <= abs_z {
        Vector3::unit_y()
    } else {
        Vector3::unit_z()
    };

    let perp = v.cross(axis);
    let len = perp.magnitude();

    if len > S::zero() {
        perp / len
    } else {
        perp
    }
}
