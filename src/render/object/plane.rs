use crate::{
    approx_eq::EPSILON,
    primitive::{point::Point, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

/// The xz plane, y = 0.
pub struct PlaneXZ;

impl PlaneXZ {
    pub fn local_intersect(ray: &Ray) -> Vec<f64> {
        // a ray parallel to the plane never hits it, even when coplanar
        if ray.direction().y().abs() < EPSILON {
            return Vec::new();
        }

        vec![-ray.origin().y() / ray.direction().y()]
    }

    pub fn local_normal_at() -> Vector {
        Vector::new(0., 1., 0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_points_up() {
        assert_eq!(PlaneXZ::local_normal_at(), Vector::new(0., 1., 0.));
    }

    #[test]
    fn ray_parallel_to_plane_misses() {
        let ray = Ray::new(Point::new(0., 10., 0.), Vector::new(0., 0., 1.));
        assert!(PlaneXZ::local_intersect(&ray).is_empty());
    }

    #[test]
    fn coplanar_ray_misses() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        assert!(PlaneXZ::local_intersect(&ray).is_empty());
    }

    #[test]
    fn ray_intersects_plane_from_above() {
        let ray = Ray::new(Point::new(0., 1., 0.), Vector::new(0., -1., 0.));
        assert_eq!(PlaneXZ::local_intersect(&ray), vec![1.]);
    }

    #[test]
    fn ray_intersects_plane_from_below() {
        let ray = Ray::new(Point::new(0., -1., 0.), Vector::new(0., 1., 0.));
        assert_eq!(PlaneXZ::local_intersect(&ray), vec![1.]);
    }
}
