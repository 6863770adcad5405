//!
//! Contains functionality for triangles.
//!

use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::aabb::Aabb;
use super::plane::Plane;
use super::spatial::Spatial;
use super::vec::scalar;

use std::fmt;

/// The `Triangle<S>` type encapsulates three vertex positions.
///
/// The vertex order matters, it defines the face normal
/// `(v1 - v0) x (v2 - v0)`. Collinear or coincident vertices are
/// allowed, but intersection queries against such a triangle have no
/// meaningful answer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle<S> {
    pub vertices: [Vector3<S>; 3],
}

impl<S: BaseFloat> Spatial<S> for Triangle<S> {
    fn bounds(&self) -> Aabb<S> {
        Aabb::from_points(self.vertices.iter().cloned())
    }
}

impl<S: BaseFloat> Triangle<S> {
    pub fn new(vertex0: Vector3<S>, vertex1: Vector3<S>, vertex2: Vector3<S>) -> Triangle<S> {
        Triangle {
            vertices: [vertex0, vertex1, vertex2],
        }
    }

    /// The vertex the edges and barycentric coordinates are relative to.
    pub fn base_vertex(&self) -> Vector3<S> {
        self.vertices[0]
    }

    /// Gets the edge from the base vertex to vertex `i + 1`.
    ///
    /// Panics if `i` is not `0` or `1`.
    pub fn edge(&self, i: usize) -> Vector3<S> {
        assert!(i < 2, "A triangle has two edges leaving its base vertex, got {}", i);
        self.vertices[i + 1] - self.vertices[0]
    }

    /// Unnormalized normal, its length is twice the area.
    pub fn scaled_normal(&self) -> Vector3<S> {
        self.edge(0).cross(self.edge(1))
    }

    pub fn normal(&self) -> Vector3<S> {
        self.scaled_normal().normalize()
    }

    /// Calculates the area of the triangle specified with the three vertices
    /// using Heron's formula
    pub fn area(&self) -> S {
        let p0 = self.vertices[0];
        let p1 = self.vertices[1];
        let p2 = self.vertices[2];

        // calculate sidelength
        let a = (p0 - p1).magnitude();
        let b = (p1 - p2).magnitude();
        let c = (p2 - p0).magnitude();

        // s is halved circumference
        let s = (a + b + c) / scalar(2.0);

        // roundoff can push degenerate triangles slightly below zero
        (s * (s - a) * (s - b) * (s - c)).max(S::zero()).sqrt()
    }

    pub fn center(&self) -> Vector3<S> {
        let one_over_three = scalar::<S>(1.0 / 3.0);
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) * one_over_three
    }

    /// Gets the point at the barycentric coordinates `u` and `v`
    /// relative to the edges leaving the base vertex.
    pub fn point_at(&self, u: S, v: S) -> Vector3<S> {
        self.base_vertex() + self.edge(0) * u + self.edge(1) * v
    }

    /// Compute barycentric coordinates [w, u, v] for
    /// the closest point to p on the triangle plane, where
    /// `w = 1 - u - v` weighs the base vertex.
    pub fn barycentric_at(&self, p: Vector3<S>) -> [S; 3] {
        let v0 = self.edge(0);
        let v1 = self.edge(1);
        let v2 = p - self.vertices[0];

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;

        let u = (d11 * d20 - d01 * d21) / denom;
        let v = (d00 * d21 - d01 * d20) / denom;
        let w = S::one() - u - v;

        [w, u, v]
    }

    /// The plane the triangle lies in, oriented along the face normal.
    pub fn plane(&self) -> Plane<S> {
        Plane::from_points(self.vertices[0], self.vertices[1], self.vertices[2])
    }
}

impl<S: fmt::Debug> fmt::Display for Triangle<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "triangle: v0 = {:?}, v1 = {:?}, v2 = {:?}",
            self.vertices[0], self.vertices[1], self.vertices[2]
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_triangle() -> Triangle<f64> {
        Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn normal_follows_vertex_order() {
        let tri = unit_triangle();
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));

        let flipped = Triangle::new(tri.vertices[0], tri.vertices[2], tri.vertices[1]);
        assert_eq!(flipped.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn area_and_center() {
        let tri = unit_triangle();
        assert!((tri.area() - 0.5).abs() < 1e-12);
        assert!((tri.scaled_normal().magnitude() - 2.0 * tri.area()).abs() < 1e-12);

        let center = tri.center();
        assert!((center.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((center.y - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(center.z, 0.0);
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let tri = Triangle::new(
            Vector3::<f32>::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0),
        );

        assert!(tri.area() < 1e-3);
        assert!(!tri.area().is_nan());
    }

    #[test]
    fn barycentric_round_trip_through_point_at() {
        let tri = Triangle::new(
            Vector3::<f64>::new(-1.0, -1.0, 0.5),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.25),
        );

        let point = tri.point_at(0.25, 0.5);
        let [w, u, v] = tri.barycentric_at(point);

        assert!((u - 0.25).abs() < 1e-12, "u was {}", u);
        assert!((v - 0.5).abs() < 1e-12, "v was {}", v);
        assert!((w - 0.25).abs() < 1e-12, "w was {}", w);
    }

    #[test]
    fn bounds_enclose_vertices() {
        let tri = unit_triangle();
        let bounds = tri.bounds();

        assert_eq!(bounds.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn edge_out_of_range() {
        unit_triangle().edge(2);
    }
}
