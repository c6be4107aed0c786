use crate::approx_eq::ApproxEq;
use std::ops;

use super::{matrix3::Matrix3, point::Point, tuple::Tuple, vector::Vector};

/// 4x4 transformation matrix, stored row-major.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    data: [f64; 16],
}

impl Matrix {
    pub fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self::new([0.; 16])
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut res = *self;

        res.data.swap(1, 4);
        res.data.swap(2, 8);
        res.data.swap(3, 12);
        res.data.swap(6, 9);
        res.data.swap(7, 13);
        res.data.swap(11, 14);

        res
    }

    pub fn submatrix(&self, row_to_del: usize, col_to_del: usize) -> Matrix3 {
        let mut new_data = [0.; 9];
        let mut id = 0;

        for row in 0..4 {
            if row == row_to_del {
                continue;
            }
            for col in 0..4 {
                if col == col_to_del {
                    continue;
                }
                new_data[id] = self.data[row * 4 + col];
                id += 1;
            }
        }
        Matrix3::new(new_data)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    /// First-row cofactor expansion.
    pub fn determinant(&self) -> f64 {
        self.data
            .iter()
            .take(4)
            .enumerate()
            .map(|(i, x)| x * self.cofactor(0, i))
            .sum()
    }

    /// Returns `None` for a singular matrix. The cofactors land transposed,
    /// so `res[(col, row)]` gets `cofactor(row, col) / det`.
    pub fn inverse(&self) -> Option<Matrix> {
        let det = self.determinant();
        if det.approx_eq(&0.) {
            return None;
        }

        let mut res = Matrix::empty();
        for row in 0..4 {
            for col in 0..4 {
                res[(col, row)] = self.cofactor(row, col) / det;
            }
        }
        Some(res)
    }
}

/// Transform builders.
impl Matrix {
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            1., 0., 0., x,
            0., 1., 0., y,
            0., 0., 1., z,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            x, 0., 0., 0.,
            0., y, 0., 0.,
            0., 0., z, 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix {
        Matrix::scaling(f, f, f)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            1., 0., 0., 0.,
            0., cos_r, -sin_r, 0.,
            0., sin_r, cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, 0., sin_r, 0.,
            0., 1., 0., 0.,
            -sin_r, 0., cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, -sin_r, 0., 0.,
            sin_r, cos_r, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Matrix {
        Matrix::new([
            1., x_prop_y, x_prop_z, 0.,
            y_prop_x, 1., y_prop_z, 0.,
            z_prop_x, z_prop_y, 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn view_transformation(from: Point, to: Point, up_v: Vector) -> Matrix {
        let up_v = up_v.normalize();

        let forward_v = (to - from).normalize();
        let left_v = forward_v.cross(up_v);
        let true_up_v = left_v.cross(forward_v);

        #[rustfmt::skip]
        let orientation = Matrix::new([
            left_v.x(), left_v.y(), left_v.z(), 0.,
            true_up_v.x(), true_up_v.y(), true_up_v.z(), 0.,
            -forward_v.x(), -forward_v.y(), -forward_v.z(), 0.,
            0., 0., 0., 1.,
        ]);

        orientation * Matrix::translation(-from.x(), -from.y(), -from.z())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(id, x)| x.approx_eq_epsilon(&other.data[id], epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 4);
        debug_assert!(col < 4);
        &self.data[row * 4 + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < 4);
        debug_assert!(col < 4);
        &mut self.data[row * 4 + col]
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        let mut output = Matrix::empty();
        for row in 0..4 {
            for col in 0..4 {
                output[(row, col)] = self[(row, 0)] * rhs[(0, col)]
                    + self[(row, 1)] * rhs[(1, col)]
                    + self[(row, 2)] * rhs[(2, col)]
                    + self[(row, 3)] * rhs[(3, col)];
            }
        }
        output
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl<T> ops::Mul<T> for &Matrix
where
    T: Tuple,
{
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        T::new(
            self[(0, 0)] * rhs.x()
                + self[(0, 1)] * rhs.y()
                + self[(0, 2)] * rhs.z()
                + self[(0, 3)] * rhs.w(),
            self[(1, 0)] * rhs.x()
                + self[(1, 1)] * rhs.y()
                + self[(1, 2)] * rhs.z()
                + self[(1, 3)] * rhs.w(),
            self[(2, 0)] * rhs.x()
                + self[(2, 1)] * rhs.y()
                + self[(2, 2)] * rhs.z()
                + self[(2, 3)] * rhs.w(),
        )
    }
}

impl<T> ops::Mul<T> for Matrix
where
    T: Tuple,
{
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

/// Fluent transform chaining. Each call applies its transform after
/// everything already accumulated: `p.rotate_x(r).scale(s).translate(t)`
/// computes `T * S * R * p`, so the first-listed transform touches the
/// value first.
pub trait Transform: Sized {
    fn transform(&mut self, matrix: &Matrix);
    fn transform_new(&self, matrix: &Matrix) -> Self;

    fn transformed(self) -> Self {
        self
    }

    fn transform_chain(&mut self, transformation: &Matrix) -> &mut Self {
        self.transform(transformation);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_z(radians))
    }

    fn shear(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> &mut Self {
        self.transform_chain(&Matrix::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}

impl Transform for Matrix {
    fn transform(&mut self, matrix: &Matrix) {
        *self = self.transform_new(matrix);
    }

    fn transform_new(&self, matrix: &Matrix) -> Self {
        matrix * (self as &Matrix)
    }
}

impl ops::Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        &self * rhs
    }
}

impl ops::Mul<Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self * &rhs
    }
}
