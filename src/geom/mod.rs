//! Contains the geometric primitives and the intersection queries between them.
//! Points are plain `Vector3<S>` values.

pub mod aabb;
pub mod intersect;
pub mod plane;
pub mod ray;
pub mod segment;
pub mod spatial;
pub mod sphere;
pub mod tri;
pub mod vec;
