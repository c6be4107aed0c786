use derive_builder::Builder;

use crate::{
    approx_eq::ApproxEq,
    primitive::{matrix::Matrix, point::Point, tuple::Tuple},
};

use super::{
    color::Color,
    intersection::{IntersecComputations, IntersectionCollection},
    light::{schlick_reflectance, PointLightSource},
    material::Material,
    object::{shape::Shape, Object},
    ray::Ray,
};

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(default)]
pub struct World {
    objects: Vec<Object>,
    light_source: Option<PointLightSource>,
    #[builder(default = "World::MAX_RECURSIVE_DEPTH")]
    max_recursive_depth: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::empty()
    }
}

impl World {
    /// How many reflection and refraction bounces a single camera ray
    /// may spawn before the contribution is cut off as black.
    pub const MAX_RECURSIVE_DEPTH: usize = 4;

    pub fn new(objects: Vec<Object>, light_source: Option<PointLightSource>) -> Self {
        Self {
            objects,
            light_source,
            max_recursive_depth: Self::MAX_RECURSIVE_DEPTH,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Two-sphere scene lit from the upper left, shared by the shading
    /// tests.
    pub fn default_testing() -> Self {
        let mut material = Material::with_color(Color::new(0.8, 1., 0.6));
        material.set_diffuse(0.7);
        material.set_specular(0.2);
        let outer = Object::with_material(Shape::Sphere, material);

        let inner =
            Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(0.5));

        let light =
            PointLightSource::new(Point::new(-10., 10., -10.), Color::white());

        Self::new(vec![outer, inner], Some(light))
    }

    pub fn objects(&self) -> &Vec<Object> {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut Vec<Object> {
        &mut self.objects
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn light_source(&self) -> Option<&PointLightSource> {
        self.light_source.as_ref()
    }

    pub fn set_light_source(&mut self, light_source: PointLightSource) {
        self.light_source = Some(light_source);
    }

    pub fn max_recursive_depth(&self) -> usize {
        self.max_recursive_depth
    }

    pub fn set_max_recursive_depth(&mut self, depth: usize) {
        self.max_recursive_depth = depth;
    }

    pub fn intersect(&self, ray: Ray) -> IntersectionCollection {
        IntersectionCollection::from_ray_and_mult_objects(ray, &self.objects)
    }

    pub fn color_at(&self, ray: Ray) -> Color {
        self.color_at_depth(ray, 0)
    }

    fn color_at_depth(&self, ray: Ray, depth: usize) -> Color {
        self.intersect(ray)
            .hit_computations()
            .map_or(Color::black(), |comps| self.shade_hit(&comps, depth))
    }

    /// A point is shadowed when something blocks the segment between it
    /// and the light.
    pub fn is_point_shadowed(&self, point: &Point) -> bool {
        let light_source = match &self.light_source {
            Some(light_source) => light_source,
            None => return false,
        };

        let point_to_light = light_source.position() - *point;
        let distance = point_to_light.magnitude();

        let shadow_ray = Ray::new(*point, point_to_light.normalize());

        self.intersect(shadow_ray)
            .hit()
            .is_some_and(|hit| hit.time() < distance)
    }

    fn shade_hit(&self, comps: &IntersecComputations, depth: usize) -> Color {
        let light_source = match &self.light_source {
            Some(light_source) => light_source,
            None => return Color::black(),
        };

        let surface = light_source.color_of_illuminated_point(
            comps.object(),
            comps.over_point(),
            comps.eye_v(),
            comps.normal_v(),
            self.is_point_shadowed(&comps.over_point()),
        );

        let reflected = self.reflected_color(comps, depth);
        let refracted = self.refracted_color(comps, depth);

        let material = comps.object().material();
        if material.reflectivity() > 0. && material.transparency() > 0. {
            let reflectance = schlick_reflectance(comps);
            surface + reflected * reflectance + refracted * (1. - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    fn reflected_color(&self, comps: &IntersecComputations, depth: usize) -> Color {
        let reflectivity = comps.object().material().reflectivity();

        if depth >= self.max_recursive_depth || reflectivity.approx_eq(&0.) {
            return Color::black();
        }

        let reflected_ray = Ray::new(comps.over_point(), comps.reflect_v());
        self.color_at_depth(reflected_ray, depth + 1) * reflectivity
    }

    fn refracted_color(&self, comps: &IntersecComputations, depth: usize) -> Color {
        let transparency = comps.object().material().transparency();

        if depth >= self.max_recursive_depth || transparency.approx_eq(&0.) {
            return Color::black();
        }

        // Snell's law, with the ratio of refractive indices deciding
        // whether the ray bends or reflects internally
        let ratio = comps.refractive_from() / comps.refractive_to();
        let cos_i = comps.eye_v().dot(comps.normal_v());
        let sin2_t = ratio.powi(2) * (1. - cos_i.powi(2));

        if sin2_t > 1. {
            return Color::black();
        }

        let cos_t = (1. - sin2_t).sqrt();
        let direction =
            comps.normal_v() * (ratio * cos_i - cos_t) - comps.eye_v() * ratio;

        let refracted_ray = Ray::new(comps.under_point(), direction);
        self.color_at_depth(refracted_ray, depth + 1) * transparency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        primitive::vector::Vector,
        render::pattern::Pattern,
    };
    use std::f64::consts::SQRT_2;

    #[test]
    fn empty_world() {
        let world = World::empty();

        assert!(world.objects().is_empty());
        assert!(world.light_source().is_none());
    }

    #[test]
    fn builder_defaults() {
        let world = WorldBuilder::default()
            .build()
            .expect("default world builds");

        assert!(world.objects().is_empty());
        assert!(world.light_source().is_none());
        assert_eq!(world.max_recursive_depth(), World::MAX_RECURSIVE_DEPTH);
    }

    #[test]
    fn intersect_world_with_ray() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        let times: Vec<f64> = world
            .intersect(ray)
            .vec()
            .iter()
            .map(|i| i.time())
            .collect();

        assert_eq!(times, vec![4., 4.5, 5.5, 6.]);
    }

    #[test]
    fn shading_an_intersection() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        assert_approx_eq_low_prec!(
            world.color_at(ray),
            Color::new(0.38066, 0.47583, 0.2855)
        );
    }

    #[test]
    fn shading_an_intersection_from_inside() {
        let mut world = World::default_testing();
        world.set_light_source(PointLightSource::new(
            Point::new(0., 0.25, 0.),
            Color::white(),
        ));
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));

        assert_approx_eq_low_prec!(
            world.color_at(ray),
            Color::new(0.90498, 0.90498, 0.90498)
        );
    }

    #[test]
    fn color_when_ray_misses() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 1., 0.));

        assert_eq!(world.color_at(ray), Color::black());
    }

    #[test]
    fn color_with_intersection_behind_ray() {
        let mut world = World::default_testing();
        for object in world.objects_mut() {
            object.material_mut().set_ambient(1.);
        }
        let inner_color = world.objects()[1]
            .material()
            .color_at(&Point::zero());

        let ray = Ray::new(Point::new(0., 0., 0.75), Vector::new(0., 0., -1.));
        assert_eq!(world.color_at(ray), inner_color);
    }

    #[test]
    fn no_shadow_when_nothing_blocks_light() {
        let world = World::default_testing();
        assert!(!world.is_point_shadowed(&Point::new(0., 10., 0.)));
    }

    #[test]
    fn shadow_when_object_between_point_and_light() {
        let world = World::default_testing();
        assert!(world.is_point_shadowed(&Point::new(10., -10., 10.)));
    }

    #[test]
    fn no_shadow_when_object_behind_light() {
        let world = World::default_testing();
        assert!(!world.is_point_shadowed(&Point::new(-20., 20., -20.)));
    }

    #[test]
    fn no_shadow_when_object_behind_point() {
        let world = World::default_testing();
        assert!(!world.is_point_shadowed(&Point::new(-2., 2., -2.)));
    }

    #[test]
    fn no_shadow_without_light_source() {
        let world = World::empty();
        assert!(!world.is_point_shadowed(&Point::zero()));
    }

    #[test]
    fn shade_hit_with_shadowed_intersection() {
        let mut world = World::new(
            Vec::new(),
            Some(PointLightSource::new(
                Point::new(0., 0., -10.),
                Color::white(),
            )),
        );
        world.add_object(Object::with_shape(Shape::Sphere));
        world.add_object(Object::with_transformation(
            Shape::Sphere,
            Matrix::translation(0., 0., 10.),
        ));

        let ray = Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.));
        assert_eq!(world.color_at(ray), Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn reflected_color_of_nonreflective_material() {
        let mut world = World::default_testing();
        world.objects_mut()[1].material_mut().set_ambient(1.);

        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_eq!(world.reflected_color(&comps, 0), Color::black());
    }

    fn world_with_reflective_plane() -> World {
        let mut world = World::default_testing();

        let mut material = Material::default();
        material.set_reflectivity(0.5);
        let plane = Object::new(
            Shape::Plane,
            material,
            Matrix::translation(0., -1., 0.),
        );
        world.add_object(plane);

        world
    }

    #[test]
    fn reflected_color_of_reflective_material() {
        let world = world_with_reflective_plane();
        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_approx_eq_low_prec!(
            world.reflected_color(&comps, 0),
            Color::new(0.19032, 0.2379, 0.14274)
        );
    }

    #[test]
    fn shade_hit_with_reflective_material() {
        let world = world_with_reflective_plane();
        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );

        assert_approx_eq_low_prec!(
            world.color_at(ray),
            Color::new(0.87677, 0.92436, 0.82918)
        );
    }

    #[test]
    fn mutually_reflective_surfaces_terminate() {
        let mut world = World::new(
            Vec::new(),
            Some(PointLightSource::new(Point::zero(), Color::white())),
        );

        let mut mirror = Material::default();
        mirror.set_reflectivity(1.);

        world.add_object(Object::new(
            Shape::Plane,
            mirror.clone(),
            Matrix::translation(0., -1., 0.),
        ));
        world.add_object(Object::new(
            Shape::Plane,
            mirror,
            Matrix::translation(0., 1., 0.),
        ));

        let ray = Ray::new(Point::zero(), Vector::new(0., 1., 0.));
        // must return rather than recurse forever
        world.color_at(ray);
    }

    #[test]
    fn reflected_color_at_maximum_depth() {
        let world = world_with_reflective_plane();
        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_eq!(
            world.reflected_color(&comps, world.max_recursive_depth()),
            Color::black()
        );
    }

    #[test]
    fn refracted_color_of_opaque_material() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_eq!(world.refracted_color(&comps, 0), Color::black());
    }

    #[test]
    fn refracted_color_at_maximum_depth() {
        let mut world = World::default_testing();
        {
            let material = world.objects_mut()[0].material_mut();
            material.set_transparency(1.);
            material.set_refractive_index(1.5);
        }

        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_eq!(
            world.refracted_color(&comps, world.max_recursive_depth()),
            Color::black()
        );
    }

    #[test]
    fn refracted_color_under_total_internal_reflection() {
        let mut world = World::default_testing();
        {
            let material = world.objects_mut()[0].material_mut();
            material.set_transparency(1.);
            material.set_refractive_index(1.5);
        }

        let ray = Ray::new(
            Point::new(0., 0., SQRT_2 / 2.),
            Vector::new(0., 1., 0.),
        );
        let intersections = world.intersect(ray);
        // the hit at sqrt(2)/2 is the second intersection
        let comps = intersections.computations_at_id(1).unwrap();

        assert_eq!(world.refracted_color(&comps, 0), Color::black());
    }

    #[test]
    fn refracted_color_of_refracted_ray() {
        let mut world = World::default_testing();
        {
            let material = world.objects_mut()[0].material_mut();
            material.set_ambient(1.);
            material.set_pattern(Pattern::test_pattern(None));
        }
        {
            let material = world.objects_mut()[1].material_mut();
            material.set_transparency(1.);
            material.set_refractive_index(1.5);
        }

        let ray = Ray::new(Point::new(0., 0., 0.1), Vector::new(0., 1., 0.));
        let intersections = world.intersect(ray);
        let comps = intersections.computations_at_id(2).unwrap();

        assert_approx_eq_low_prec!(
            world.refracted_color(&comps, 0),
            Color::new(0., 0.99888, 0.04725)
        );
    }

    #[test]
    fn shade_hit_with_transparent_floor() {
        let mut world = World::default_testing();

        let mut floor_material = Material::default();
        floor_material.set_transparency(0.5);
        floor_material.set_refractive_index(1.5);
        world.add_object(Object::new(
            Shape::Plane,
            floor_material,
            Matrix::translation(0., -1., 0.),
        ));

        let mut ball_material = Material::with_color(Color::red());
        ball_material.set_ambient(0.5);
        world.add_object(Object::new(
            Shape::Sphere,
            ball_material,
            Matrix::translation(0., -3.5, -0.5),
        ));

        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );

        assert_approx_eq_low_prec!(
            world.color_at(ray),
            Color::new(0.93642, 0.68642, 0.68642)
        );
    }

    #[test]
    fn shade_hit_with_reflective_transparent_floor() {
        let mut world = World::default_testing();

        let mut floor_material = Material::default();
        floor_material.set_reflectivity(0.5);
        floor_material.set_transparency(0.5);
        floor_material.set_refractive_index(1.5);
        world.add_object(Object::new(
            Shape::Plane,
            floor_material,
            Matrix::translation(0., -1., 0.),
        ));

        let mut ball_material = Material::with_color(Color::red());
        ball_material.set_ambient(0.5);
        world.add_object(Object::new(
            Shape::Sphere,
            ball_material,
            Matrix::translation(0., -3.5, -0.5),
        ));

        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );

        assert_approx_eq_low_prec!(
            world.color_at(ray),
            Color::new(0.93391, 0.69643, 0.69243)
        );
    }

    #[test]
    fn depth_is_configurable() {
        let mut world = world_with_reflective_plane();
        world.set_max_recursive_depth(0);

        let ray = Ray::new(
            Point::new(0., 0., -3.),
            Vector::new(0., -SQRT_2 / 2., SQRT_2 / 2.),
        );
        let comps = world.intersect(ray).hit_computations().unwrap();

        assert_eq!(world.reflected_color(&comps, 0), Color::black());
    }
}
