use ::cgmath::{BaseFloat, Vector3};

use super::aabb::Aabb;

pub trait Spatial<S> {
    /// Axis aligned bounding box of the spatial object
    fn bounds(&self) -> Aabb<S>;
}

impl<S: BaseFloat> Spatial<S> for Aabb<S> {
    fn bounds(&self) -> Aabb<S> {
        *self
    }
}

impl<S: BaseFloat> Spatial<S> for Vector3<S> {
    fn bounds(&self) -> Aabb<S> {
        Aabb { min: *self, max: *self }
    }
}
