//! Ready-made demo scenes for the command line renderer.

use std::f64::consts::PI;

use crate::{
    primitive::{
        matrix::{Matrix, Transform},
        point::Point,
        tuple::Tuple,
        vector::Vector,
    },
    render::{
        camera::Camera,
        color::Color,
        light::PointLightSource,
        material::Material,
        object::{shape::Shape, Object},
        pattern::Pattern,
        world::World,
    },
};

fn camera_looking_into_scene(
    width: usize,
    height: usize,
    field_of_view: f64,
    from: Point,
) -> Camera {
    let transformation =
        Matrix::view_transformation(from, Point::new(0., 1., 0.), Vector::new(0., 1., 0.));
    Camera::with_transformation(width, height, field_of_view, transformation)
}

/// Checkered floor with three patterned spheres.
pub fn patterned_room(width: usize, height: usize, field_of_view: f64) -> (World, Camera) {
    let floor = Object::with_material(
        Shape::Plane,
        Material::with_pattern(Pattern::checkers(
            Color::new(0.2, 0.2, 0.2),
            Color::new(0.8, 0.8, 0.8),
            None,
        )),
    );

    let middle_transformation = Matrix::translation(-0.5, 1., 0.5);
    let mut middle_material = Material::with_pattern(Pattern::stripe(
        Color::new(0.1, 1., 0.5),
        Color::new(0.9, 0.1, 0.2),
        Some(
            Matrix::scaling_uniform(0.25)
                .rotate_z(PI / 4.)
                .transformed(),
        ),
    ));
    middle_material.set_diffuse(0.7);
    middle_material.set_specular(0.3);
    let middle = Object::new(Shape::Sphere, middle_material, middle_transformation);

    let right_transformation = Matrix::scaling_uniform(0.5)
        .translate(1.5, 0.5, -0.5)
        .transformed();
    let mut right_material = Material::with_pattern(Pattern::gradient(
        Color::new(1., 0.6, 0.1),
        Color::new(0.1, 0.2, 1.),
        Some(
            Matrix::scaling(2., 1., 1.)
                .translate(1., 0., 0.)
                .transformed(),
        ),
    ));
    right_material.set_diffuse(0.7);
    right_material.set_specular(0.3);
    let right = Object::new(Shape::Sphere, right_material, right_transformation);

    let left_transformation = Matrix::scaling_uniform(0.33)
        .translate(-1.5, 0.33, -0.75)
        .transformed();
    let left_material = Material::with_pattern(Pattern::ring(
        Color::new(0.8, 0.2, 0.2),
        Color::new(1., 0.9, 0.6),
        Some(Matrix::scaling_uniform(0.15).rotate_x(PI / 3.).transformed()),
    ));
    let left = Object::new(Shape::Sphere, left_material, left_transformation);

    let light = PointLightSource::new(Point::new(-10., 10., -10.), Color::white());
    let world = World::new(vec![floor, middle, right, left], Some(light));

    let camera = camera_looking_into_scene(
        width,
        height,
        field_of_view,
        Point::new(0., 1.5, -5.),
    );

    (world, camera)
}

/// Glass and mirror spheres over a checkered floor, showing off
/// reflection and refraction.
pub fn glass_spheres(width: usize, height: usize, field_of_view: f64) -> (World, Camera) {
    let mut floor_material = Material::with_pattern(Pattern::checkers(
        Color::new(0.15, 0.15, 0.15),
        Color::new(0.85, 0.85, 0.85),
        None,
    ));
    floor_material.set_specular(0.);
    floor_material.set_reflectivity(0.1);
    let floor = Object::with_material(Shape::Plane, floor_material);

    let glass = Object::new(
        Shape::Sphere,
        Material::glass(),
        Matrix::translation(-0.5, 1., 0.5),
    );

    let mirror = Object::new(
        Shape::Sphere,
        Material::mirror(),
        Matrix::scaling_uniform(0.75)
            .translate(1.6, 0.75, -0.6)
            .transformed(),
    );

    let small = Object::new(
        Shape::Sphere,
        Material::matte_with_color(Color::new(0.9, 0.2, 0.2)),
        Matrix::scaling_uniform(0.33)
            .translate(-1.7, 0.33, -0.7)
            .transformed(),
    );

    let light = PointLightSource::new(Point::new(-10., 10., -10.), Color::white());
    let world = World::new(vec![floor, glass, mirror, small], Some(light));

    let camera = camera_looking_into_scene(
        width,
        height,
        field_of_view,
        Point::new(0., 1.5, -5.),
    );

    (world, camera)
}
