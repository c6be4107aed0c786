use super::matrix::{Matrix, Transform};

/// Homogeneous 4-component value. Points carry w = 1, vectors w = 0,
/// which is what makes translation affect the former and not the latter.
pub trait Tuple {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;
}

impl<T> Transform for T
where
    T: Tuple + Copy,
{
    fn transform(&mut self, matrix: &Matrix) {
        *self = matrix * *self;
    }

    fn transform_new(&self, matrix: &Matrix) -> Self {
        matrix * *self
    }
}
