pub mod plane;
pub mod shape;
pub mod sphere;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::primitive::{
    matrix::{Matrix, Transform},
    point::Point,
    vector::Vector,
};

use self::shape::Shape;

use super::{material::Material, ray::Ray};

static NEXT_OBJECT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_object_id() -> usize {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A shape placed in the world with a material and a transformation.
/// The transformation's inverse and inverse transpose are cached at
/// construction so intersection and shading never invert per ray.
///
/// Identity is the `id`, unique per constructed object. Cloning keeps
/// the id, so a clone is deliberately the same object; refraction
/// relies on that to tell when a ray exits the surface it entered.
#[derive(Clone, Debug)]
pub struct Object {
    id: usize,
    shape: Shape,
    material: Material,
    transformation: Matrix,
    transformation_inverse: Matrix,
    inverse_transpose: Matrix,
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Object {
    pub fn new(shape: Shape, material: Material, transformation: Matrix) -> Self {
        let transformation_inverse = transformation
            .inverse()
            .expect("object transformation must be invertible");

        Self {
            id: next_object_id(),
            shape,
            material,
            inverse_transpose: transformation_inverse.transpose(),
            transformation,
            transformation_inverse,
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::new(shape, Material::default(), Matrix::identity())
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix) -> Self {
        Self::new(shape, Material::default(), transformation)
    }

    pub fn with_material(shape: Shape, material: Material) -> Self {
        Self::new(shape, material, Matrix::identity())
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix {
        &self.transformation_inverse
    }

    pub fn set_transformation(&mut self, transformation: Matrix) {
        self.transformation_inverse = transformation
            .inverse()
            .expect("object transformation must be invertible");
        self.inverse_transpose = self.transformation_inverse.transpose();
        self.transformation = transformation;
    }

    /// Intersection times of a world-space ray with this object. The ray
    /// is brought into object space with the cached inverse, where each
    /// shape intersects its canonical form.
    pub fn intersection_times(&self, world_ray: &Ray) -> Vec<f64> {
        let local_ray = world_ray.transform_new(&self.transformation_inverse);
        self.shape.local_intersect(&local_ray)
    }

    /// Surface normal at a world-space point, as a normalized world-space
    /// vector. Object-space normals go back to world space through the
    /// transpose of the inverse, which keeps them perpendicular under
    /// nonuniform scaling.
    pub fn normal_at(&self, world_point: Point) -> Vector {
        let local_point = self.transformation_inverse * world_point;
        let local_normal = self.shape.local_normal_at(local_point);
        let world_normal = self.inverse_transpose * local_normal;
        world_normal.normalize()
    }
}
