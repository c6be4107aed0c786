use crate::approx_eq::ApproxEq;
use std::ops;

/// Smallest submatrix size; its determinant is the base case of the
/// cofactor expansion.
#[derive(Debug, Clone, Copy)]
pub struct Matrix2 {
    data: [f64; 4],
}

impl Matrix2 {
    pub fn new(data: [f64; 4]) -> Self {
        Self { data }
    }

    pub fn determinant(&self) -> f64 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }
}

impl PartialEq for Matrix2 {
    fn eq(&self, other: &Matrix2) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(id, x)| x.approx_eq(&other.data[id]))
    }
}

impl ops::Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 2);
        debug_assert!(col < 2);
        &self.data[row * 2 + col]
    }
}
