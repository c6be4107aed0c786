use super::matrix2::Matrix2;
use crate::approx_eq::ApproxEq;
use std::ops;

#[derive(Debug, Clone, Copy)]
pub struct Matrix3 {
    data: [f64; 9],
}

impl Matrix3 {
    pub fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    pub fn submatrix(&self, row_to_del: usize, col_to_del: usize) -> Matrix2 {
        let mut new_data = [0.; 4];
        let mut id = 0;

        for row in 0..3 {
            if row == row_to_del {
                continue;
            }
            for col in 0..3 {
                if col == col_to_del {
                    continue;
                }
                new_data[id] = self.data[row * 3 + col];
                id += 1;
            }
        }
        Matrix2::new(new_data)
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

    pub fn determinant(&self) -> f64 {
        self.data
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, x)| x * self.cofactor(0, i))
            .sum()
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Matrix3) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(id, x)| x.approx_eq(&other.data[id]))
    }
}

impl ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 3);
        debug_assert!(col < 3);
        &self.data[row * 3 + col]
    }
}
