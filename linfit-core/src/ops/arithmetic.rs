// src/ops/arithmetic.rs
//
// Element-wise arithmetic. Operands of `+` and `-` must have the same type,
// and therefore the same shape, so none of these operations can fail.

use crate::matrix::Matrix;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Combines two matrices entry by entry.
    pub fn zip_map<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        let mut result = *self;
        for (dst, src) in result.iter_mut().zip(other.iter()) {
            *dst = f(*dst, *src);
        }
        result
    }
}

// --- Addition ---

impl<const ROWS: usize, const COLS: usize> Add for Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl<'a, const ROWS: usize, const COLS: usize> Add<&'a Matrix<ROWS, COLS>> for &'a Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn add(self, rhs: &'a Matrix<ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<const ROWS: usize, const COLS: usize> AddAssign for Matrix<ROWS, COLS> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<const ROWS: usize, const COLS: usize> AddAssign<&Matrix<ROWS, COLS>> for Matrix<ROWS, COLS> {
    fn add_assign(&mut self, rhs: &Matrix<ROWS, COLS>) {
        for (dst, src) in self.iter_mut().zip(rhs.iter()) {
            *dst += *src;
        }
    }
}

// --- Subtraction ---

impl<const ROWS: usize, const COLS: usize> Sub for Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl<'a, const ROWS: usize, const COLS: usize> Sub<&'a Matrix<ROWS, COLS>> for &'a Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn sub(self, rhs: &'a Matrix<ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<const ROWS: usize, const COLS: usize> SubAssign for Matrix<ROWS, COLS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<const ROWS: usize, const COLS: usize> SubAssign<&Matrix<ROWS, COLS>> for Matrix<ROWS, COLS> {
    fn sub_assign(&mut self, rhs: &Matrix<ROWS, COLS>) {
        for (dst, src) in self.iter_mut().zip(rhs.iter()) {
            *dst -= *src;
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Neg for Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

// --- Scalar multiplication (both sides) ---

impl<const ROWS: usize, const COLS: usize> Mul<f64> for Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn mul(self, scalar: f64) -> Self::Output {
        self.map(|v| v * scalar)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<f64> for &Matrix<ROWS, COLS> {
    type Output = Matrix<ROWS, COLS>;

    fn mul(self, scalar: f64) -> Self::Output {
        self.map(|v| v * scalar)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<Matrix<ROWS, COLS>> for f64 {
    type Output = Matrix<ROWS, COLS>;

    fn mul(self, matrix: Matrix<ROWS, COLS>) -> Self::Output {
        matrix.map(|v| self * v)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<&Matrix<ROWS, COLS>> for f64 {
    type Output = Matrix<ROWS, COLS>;

    fn mul(self, matrix: &Matrix<ROWS, COLS>) -> Self::Output {
        matrix.map(|v| self * v)
    }
}

impl<const ROWS: usize, const COLS: usize> MulAssign<f64> for Matrix<ROWS, COLS> {
    fn mul_assign(&mut self, scalar: f64) {
        self.iter_mut().for_each(|v| *v *= scalar);
    }
}
