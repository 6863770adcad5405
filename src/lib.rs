//! Geometric primitives and the intersection queries used for
//! terrain and model picking, collision queries and scenery tessellation.
//!
//! All primitives are generic over the scalar type, so the same queries
//! are available in `f32` and `f64`.

#[macro_use]
extern crate log;
extern crate cgmath;
extern crate num_traits;
extern crate rand;
extern crate thiserror;

pub mod geom;
pub mod verify;

pub use geom::aabb::Aabb;
pub use geom::intersect::{intersection_point, intersects, IntersectionPoint, Intersects};
pub use geom::plane::Plane;
pub use geom::ray::Ray;
pub use geom::segment::LineSegment;
pub use geom::spatial::Spatial;
pub use geom::sphere::Sphere;
pub use geom::tri::Triangle;
pub use geom::vec::{equivalent, equivalent_with, perpendicular};
pub use verify::{Verification, VerificationBuilder};
