use crate::{
    primitive::{point::Point, vector::Vector},
    render::ray::Ray,
};

use super::{plane::PlaneXZ, sphere::UnitSphere};

/// Canonical geometry in object space. Placement in the world is the
/// enclosing `Object`'s transformation, so every variant only has to
/// answer queries about its untransformed form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere,
    Plane,
}

impl Shape {
    pub fn local_intersect(&self, local_ray: &Ray) -> Vec<f64> {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(local_ray),
            Shape::Plane => PlaneXZ::local_intersect(local_ray),
        }
    }

    pub fn local_normal_at(&self, local_point: Point) -> Vector {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(local_point),
            Shape::Plane => PlaneXZ::local_normal_at(),
        }
    }
}
