use crate::{
    approx_eq::EPSILON,
    primitive::{point::Point, vector::Vector},
};

use super::{object::Object, ray::Ray};

#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }
}

/// Intersections of one ray with the world, sorted by time ascending.
/// The sorted order is what the hit and the refractive-index walk rely
/// on.
#[derive(Clone, Debug)]
pub struct IntersectionCollection<'a> {
    ray: Ray,
    vec: Vec<Intersection<'a>>,
}

impl<'a> IntersectionCollection<'a> {
    fn new(ray: Ray, mut vec: Vec<Intersection<'a>>) -> Self {
        vec.sort_unstable_by(|a, b| {
            a.time
                .partial_cmp(&b.time)
                .expect("intersection times must not be NaN")
        });
        Self { ray, vec }
    }

    pub fn from_times_and_obj(ray: Ray, times: Vec<f64>, object: &'a Object) -> Self {
        let vec = times
            .into_iter()
            .map(|time| Intersection::new(time, object))
            .collect();
        Self::new(ray, vec)
    }

    pub fn from_ray_and_obj(ray: Ray, object: &'a Object) -> Self {
        let times = object.intersection_times(&ray);
        Self::from_times_and_obj(ray, times, object)
    }

    pub fn from_ray_and_mult_objects(ray: Ray, objects: &'a [Object]) -> Self {
        let vec = objects
            .iter()
            .flat_map(|object| {
                object
                    .intersection_times(&ray)
                    .into_iter()
                    .map(move |time| Intersection::new(time, object))
            })
            .collect();
        Self::new(ray, vec)
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    pub fn vec(&self) -> &Vec<Intersection<'a>> {
        &self.vec
    }

    /// The intersection the ray actually hits, the one with the lowest
    /// nonnegative time. Intersections behind the ray's origin never
    /// count.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.vec.iter().find(|intersection| intersection.time > 0.)
    }

    pub fn hit_computations(&self) -> Option<IntersecComputations<'a>> {
        self.hit()
            .map(|hit| IntersecComputations::new(hit, &self.ray, &self.vec))
    }

    pub fn computations_at_id(&self, id: usize) -> Option<IntersecComputations<'a>> {
        self.vec
            .get(id)
            .map(|intersection| IntersecComputations::new(intersection, &self.ray, &self.vec))
    }
}

/// Values shading needs at a hit, precomputed once.
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    point: Point,
    /// Point nudged along the normal, used as the origin for shadow and
    /// reflection rays so they do not re-hit their own surface.
    over_point: Point,
    /// Point nudged against the normal, origin of refraction rays.
    under_point: Point,
    eye_v: Vector,
    normal_v: Vector,
    reflect_v: Vector,
    inside: bool,
    refractive_from: f64,
    refractive_to: f64,
}

impl<'a> IntersecComputations<'a> {
    pub fn new(
        hit: &Intersection<'a>,
        ray: &Ray,
        all_intersections: &[Intersection<'a>],
    ) -> Self {
        let point = ray.position(hit.time);
        let eye_v = -*ray.direction();
        let mut normal_v = hit.object.normal_at(point);

        let inside = normal_v.dot(eye_v) < 0.;
        if inside {
            normal_v = -normal_v;
        }

        let reflect_v = ray.direction().reflect(normal_v);

        let normal_offset = normal_v * EPSILON;
        let over_point = point + normal_offset;
        let under_point = point - normal_offset;

        let (refractive_from, refractive_to) =
            Self::refractive_indices(hit, all_intersections);

        Self {
            time: hit.time,
            object: hit.object,
            point,
            over_point,
            under_point,
            eye_v,
            normal_v,
            reflect_v,
            inside,
            refractive_from,
            refractive_to,
        }
    }

    /// Refractive indices on either side of the hit. Walks the sorted
    /// intersections keeping a stack of objects the ray is currently
    /// inside of; the indices come from the innermost container just
    /// before and just after the hit.
    fn refractive_indices(
        hit: &Intersection<'a>,
        all_intersections: &[Intersection<'a>],
    ) -> (f64, f64) {
        let mut refractive_from = 1.;
        let mut refractive_to = 1.;

        let mut containers: Vec<&Object> = Vec::new();

        for intersection in all_intersections {
            let is_hit =
                intersection.time == hit.time && intersection.object == hit.object;

            if is_hit {
                refractive_from = containers
                    .last()
                    .map_or(1., |object| object.material().refractive_index());
            }

            match containers
                .iter()
                .position(|object| *object == intersection.object)
            {
                Some(pos) => {
                    containers.remove(pos);
                }
                None => containers.push(intersection.object),
            }

            if is_hit {
                refractive_to = containers
                    .last()
                    .map_or(1., |object| object.material().refractive_index());
                break;
            }
        }

        (refractive_from, refractive_to)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn over_point(&self) -> Point {
        self.over_point
    }

    pub fn under_point(&self) -> Point {
        self.under_point
    }

    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }

    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }

    pub fn reflect_v(&self) -> Vector {
        self.reflect_v
    }

    pub fn inside(&self) -> bool {
        self.inside
    }

    pub fn refractive_from(&self) -> f64 {
        self.refractive_from
    }

    pub fn refractive_to(&self) -> f64 {
        self.refractive_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        approx_eq::ApproxEq,
        assert_approx_eq,
        primitive::{matrix::Matrix, tuple::Tuple},
        render::{material::Material, object::shape::Shape},
    };
    use std::f64::consts::SQRT_2;

    fn glass_sphere_with(transformation: Matrix, refractive_index: f64) -> Object {
        let mut material = Material::glass();
        material.set_refractive_index(refractive_index);
        Object::new(Shape::Sphere, material, transformation)
    }

    #[test]
    fn hit_when_all_intersections_positive() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let intersections =
            IntersectionCollection::from_times_and_obj(ray, vec![1., 2.], &sphere);

        assert_eq!(intersections.hit().map(|hit| hit.time()), Some(1.));
    }

    #[test]
    fn hit_when_some_intersections_negative() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let intersections =
            IntersectionCollection::from_times_and_obj(ray, vec![1., -1.], &sphere);

        assert_eq!(intersections.hit().map(|hit| hit.time()), Some(1.));
    }

    #[test]
    fn no_hit_when_all_intersections_negative() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let intersections =
            IntersectionCollection::from_times_and_obj(ray, vec![-2., -1.], &sphere);

        assert!(intersections.hit().is_none());
    }

    #[test]
    fn hit_is_lowest_nonnegative_time() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let intersections = IntersectionCollection::from_times_and_obj(
            ray,
            vec![5., 7., -3., 2.],
            &sphere,
        );

        assert_eq!(intersections.hit().map(|hit| hit.time()), Some(2.));
    }

    #[test]
    fn precompute_hit_outside() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = IntersectionCollection::from_ray_and_obj(ray, &sphere)
            .hit_computations()
            .unwrap();

        assert_eq!(comps.time(), 4.);
        assert_eq!(comps.point(), Point::new(0., 0., -1.));
        assert_eq!(comps.eye_v(), Vector::new(0., 0., -1.));
        assert_eq!(comps.normal_v(), Vector::new(0., 0., -1.));
        assert!(!comps.inside());
    }

    #[test]
    fn precompute_hit_inside_flips_normal() {
        let sphere = Object::with_shape(Shape::Sphere);
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let comps = IntersectionCollection::from_ray_and_obj(ray, &sphere)
            .hit_computations()
            .unwrap();

        assert_eq!(comps.time(), 1.);
        assert_eq!(comps.point(), Point::new(0., 0., 1.));
        assert_eq!(comps.eye_v(), Vector::new(0., 0., -1.));
        assert_eq!(comps.normal_v(), Vector::new(0., 0., -1.));
        assert!(comps.inside());
    }

    #[test]
    fn hit_is_offset_above_surface() {
        let sphere =
            Object::with_transformation(Shape::Sphere, Matrix::translation(0., 0., 1.));
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = IntersectionCollection::from_ray_and_obj(ray, &sphere)
            .hit_computations()
            .unwrap();

        assert!(comps.over_point().z() < -EPSILON / 2.);
        assert!(comps.point().z() > comps.over_point().z());
    }

    #[test]
    fn hit_is_offset_below_surface() {
        let sphere = glass_sphere_with(Matrix::translation(0., 0., 1.), 1.5);
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = IntersectionCollection::from_ray_and_obj(ray, &sphere)
            .hit_computations()
            .unwrap();

        assert!(comps.under_point().z() > EPSILON / 2.);
        assert!(comps.point().z() < comps.under_point().z());
    }

    #[test]
    fn precompute_reflection_vector() {
        let plane = Object::with_shape(Shape::Plane);
        let ray = Ray::new(
            Point::new(0., 1., -1.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );
        let comps = IntersectionCollection::from_ray_and_obj(ray, &plane)
            .hit_computations()
            .unwrap();

        assert_eq!(comps.reflect_v(), Vector::new(0., SQRT_2 / 2., SQRT_2 / 2.));
    }

    #[test]
    fn refractive_indices_through_nested_glass_spheres() {
        let a = glass_sphere_with(Matrix::scaling_uniform(2.), 1.5);
        let b = glass_sphere_with(Matrix::translation(0., 0., -0.25), 2.);
        let c = glass_sphere_with(Matrix::translation(0., 0., 0.25), 2.5);

        let objects = [a, b, c];
        let ray = Ray::new(Point::new(0., 0., -4.), Vector::new(0., 0., 1.));
        let intersections =
            IntersectionCollection::from_ray_and_mult_objects(ray, &objects);

        let expected = [
            (1., 1.5),
            (1.5, 2.),
            (2., 2.5),
            (2.5, 2.5),
            (2.5, 1.5),
            (1.5, 1.),
        ];

        assert_eq!(intersections.vec().len(), expected.len());
        for (id, (from, to)) in expected.into_iter().enumerate() {
            let comps = intersections.computations_at_id(id).unwrap();

            assert_approx_eq!(comps.refractive_from(), from);
            assert_approx_eq!(comps.refractive_to(), to);
        }
    }
}
