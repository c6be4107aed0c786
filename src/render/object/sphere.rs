use crate::{
    primitive::{point::Point, vector::Vector},
    render::ray::Ray,
};

/// Unit sphere centered at the origin.
pub struct UnitSphere;

impl UnitSphere {
    pub fn local_intersect(ray: &Ray) -> Vec<f64> {
        let sphere_to_ray = *ray.origin() - Point::zero();

        let a = ray.direction().dot(*ray.direction());
        let b = 2. * ray.direction().dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b.powi(2) - 4. * a * c;

        if discriminant < 0. || a == 0. {
            return Vec::new();
        }

        let delta_sqrt = discriminant.sqrt();
        vec![(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)]
    }

    pub fn local_normal_at(point: Point) -> Vector {
        point - Point::zero()
    }
}
