use ::cgmath::prelude::*;
use ::cgmath::{BaseFloat, Vector3};

use super::aabb::Aabb;
use super::spatial::Spatial;
use super::vec::scalar;

use std::fmt;

/// A solid sphere. A radius of zero is a valid sphere containing just
/// its center, a negative radius marks the empty sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<S> {
    pub center: Vector3<S>,
    pub radius: S,
}

impl<S: BaseFloat> Sphere<S> {
    pub fn new(center: Vector3<S>, radius: S) -> Sphere<S> {
        debug_assert!(radius >= S::zero(), "Sphere radius must not be negative, was {:?}", radius);
        Sphere { center, radius }
    }

    /// A sphere that contains nothing and that is replaced by the first
    /// point passed to `expand_by`.
    pub fn empty() -> Sphere<S> {
        Sphere {
            center: Vector3::new(S::zero(), S::zero(), S::zero()),
            radius: -S::one(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.radius < S::zero()
    }

    pub fn radius2(&self) -> S {
        self.radius * self.radius
    }

    /// Checks if the point is inside or on the surface.
    pub fn contains(&self, point: Vector3<S>) -> bool {
        !self.is_empty() && self.center.distance2(point) <= self.radius2()
    }

    /// Grows the sphere to also contain the given point.
    ///
    /// The center moves towards the point so that the new sphere touches
    /// both the point and the far side of the old sphere.
    pub fn expand_by(&mut self, point: Vector3<S>) {
        if self.is_empty() {
            self.center = point;
            self.radius = S::zero();
            return;
        }

        let dist = self.center.distance(point);
        if dist <= self.radius {
            return;
        }

        let new_radius = (self.radius + dist) / scalar(2.0);
        let shift = (new_radius - self.radius) / dist;
        self.center += (point - self.center) * shift;
        self.radius = new_radius;
    }
}

impl<S: BaseFloat> Spatial<S> for Sphere<S> {
    fn bounds(&self) -> Aabb<S> {
        if self.is_empty() {
            return Aabb::empty();
        }

        let extent = Vector3::new(self.radius, self.radius, self.radius);
        Aabb {
            min: self.center - extent,
            max: self.center + extent,
        }
    }
}

impl<S: fmt::Debug> fmt::Display for Sphere<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sphere: center = {:?}, radius = {:?}", self.center, self.radius)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_sphere_contains_only_center() {
        let center = Vector3::new(1.0, 2.0, 3.0);
        let sphere = Sphere::new(center, 0.0);

        assert!(sphere.contains(center));
        assert!(!sphere.contains(Vector3::new(1.0, 2.0, 3.0001)));
    }

    #[test]
    fn contains_is_inclusive() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 2.0);

        assert!(sphere.contains(Vector3::new(0.0, 2.0, 0.0)));
        assert!(sphere.contains(Vector3::new(-1.0, 1.0, 0.5)));
        assert!(!sphere.contains(Vector3::new(0.0, 2.5, 0.0)));
    }

    #[test]
    fn empty_contains_nothing() {
        let sphere = Sphere::<f32>::empty();

        assert!(sphere.is_empty());
        assert!(!sphere.contains(Vector3::new(0.0, 0.0, 0.0)));
        assert_eq!(sphere.bounds(), Aabb::empty());
    }

    #[test]
    fn expand_by_points() {
        let mut sphere = Sphere::empty();

        sphere.expand_by(Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(sphere.radius, 0.0);
        assert_eq!(sphere.center, Vector3::new(-1.0, 0.0, 0.0));

        sphere.expand_by(Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(sphere.radius, 2.0);
        assert_eq!(sphere.center, Vector3::new(1.0, 0.0, 0.0));

        // already inside, nothing changes
        sphere.expand_by(Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(sphere.radius, 2.0);
        assert_eq!(sphere.center, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn bounds_of_sphere() {
        let sphere = Sphere::new(Vector3::new(1.0, 1.0, 1.0), 0.5);
        let bounds = sphere.bounds();

        assert_eq!(bounds.min, Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(bounds.max, Vector3::new(1.5, 1.5, 1.5));
    }
}
