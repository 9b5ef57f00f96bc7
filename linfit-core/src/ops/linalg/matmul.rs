// Matrix multiplication for fixed-shape matrices.

use crate::matrix::Matrix;
use std::ops::Mul;

/// Performs matrix multiplication C = A @ B.
/// A: [R, K], B: [K, C] -> C: [R, C]
///
/// The inner dimension `K` is shared by both argument types, so mismatched
/// operands are rejected by the compiler and the product cannot fail.
pub fn matmul<const R: usize, const K: usize, const C: usize>(
    a: &Matrix<R, K>,
    b: &Matrix<K, C>,
) -> Matrix<R, C> {
    let mut output = Matrix::<R, C>::zeros();
    for i in 0..R {
        for j in 0..C {
            let mut sum = 0.0;
            for l in 0..K {
                sum += a.data[i][l] * b.data[l][j];
            }
            output.data[i][j] = sum;
        }
    }
    output
}

impl<const R: usize, const K: usize, const C: usize> Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: Matrix<K, C>) -> Self::Output {
        matmul(&self, &rhs)
    }
}

impl<'a, const R: usize, const K: usize, const C: usize> Mul<&'a Matrix<K, C>> for &'a Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: &'a Matrix<K, C>) -> Self::Output {
        matmul(self, rhs)
    }
}

impl<const R: usize, const K: usize> Matrix<R, K> {
    /// Method form of [`matmul`].
    pub fn matmul<const C: usize>(&self, other: &Matrix<K, C>) -> Matrix<R, C> {
        matmul(self, other)
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
