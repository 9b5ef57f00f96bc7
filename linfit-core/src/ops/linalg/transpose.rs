// src/ops/linalg/transpose.rs

use crate::matrix::Matrix;
use std::ops::BitXor;

/// Marker selecting the transpose operator: `m ^ Transpose`.
///
/// Zero-sized and stateless; every value is interchangeable with any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transpose;

/// Performs the transpose of a matrix, swapping rows and columns.
///
/// `result[(i, j)] == matrix[(j, i)]` for every position.
pub fn transpose_op<const ROWS: usize, const COLS: usize>(
    matrix: &Matrix<ROWS, COLS>,
) -> Matrix<COLS, ROWS> {
    let mut transposed = Matrix::<COLS, ROWS>::zeros();
    for i in 0..COLS {
        for j in 0..ROWS {
            transposed.data[i][j] = matrix.data[j][i];
        }
    }
    transposed
}

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Matrix<COLS, ROWS> {
        transpose_op(self)
    }
}

impl<const ROWS: usize, const COLS: usize> BitXor<Transpose> for Matrix<ROWS, COLS> {
    type Output = Matrix<COLS, ROWS>;

    fn bitxor(self, _: Transpose) -> Self::Output {
        transpose_op(&self)
    }
}

impl<const ROWS: usize, const COLS: usize> BitXor<Transpose> for &Matrix<ROWS, COLS> {
    type Output = Matrix<COLS, ROWS>;

    fn bitxor(self, _: Transpose) -> Self::Output {
        transpose_op(self)
    }
}

// --- Tests ---
