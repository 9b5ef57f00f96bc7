// src/matrix/mod.rs

use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

pub mod create;
mod debug;
mod traits;
pub mod vector;

pub use vector::{ColumnVector, RowVector, Vector};

/// A dense two-dimensional matrix of `f64` with a shape fixed at compile time.
///
/// `ROWS` and `COLS` are part of the type, so two matrices can only be added,
/// subtracted or multiplied when their shapes are compatible. Storage is an
/// inline `[[f64; COLS]; ROWS]` array in row-major order; nothing is allocated
/// on the heap and a `Matrix` is copied on assignment like any plain value.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix<const ROWS: usize, const COLS: usize> {
    pub(crate) data: [[f64; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Wraps a row-major array literal. The literal's type fixes the shape, so
    /// this constructor cannot fail.
    pub const fn new(data: [[f64; COLS]; ROWS]) -> Self {
        Matrix { data }
    }

    /// Creates a matrix with every entry set to 0.
    pub const fn zeros() -> Self {
        Matrix {
            data: [[0.0; COLS]; ROWS],
        }
    }

    /// Creates a matrix with every entry set to `value`.
    pub const fn full(value: f64) -> Self {
        Matrix {
            data: [[value; COLS]; ROWS],
        }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut result = Self::zeros();
        for (i, row) in result.data.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = f(i, j);
            }
        }
        result
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Borrows the underlying row-major storage.
    pub fn as_array(&self) -> &[[f64; COLS]; ROWS] {
        &self.data
    }

    /// Consumes the matrix and returns its storage.
    pub fn into_array(self) -> [[f64; COLS]; ROWS] {
        self.data
    }

    /// Iterates over all entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter().flat_map(|row| row.iter())
    }

    /// Iterates mutably over all entries in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.data.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Returns a new matrix with `f` applied to every entry.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let mut result = *self;
        result.iter_mut().for_each(|v| *v = f(*v));
        result
    }

    /// Broadcasts `value` into every entry.
    pub fn fill(&mut self, value: f64) {
        for row in self.data.iter_mut() {
            row.fill(value);
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Matrix<ROWS, COLS> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<ROWS, COLS> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl<const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<ROWS, COLS> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

// --- 1x1 matrices ---

impl Matrix<1, 1> {
    /// Returns the single entry of a 1x1 matrix, e.g. the result of `rowᵀ * col`.
    pub const fn scalar(&self) -> f64 {
        self.data[0][0]
    }
}

impl From<Matrix<1, 1>> for f64 {
    fn from(matrix: Matrix<1, 1>) -> f64 {
        matrix.scalar()
    }
}

impl From<f64> for Matrix<1, 1> {
    fn from(value: f64) -> Self {
        Matrix::new([[value]])
    }
}

// --- Square matrices ---

impl<const N: usize> Matrix<N, N> {
    /// The N x N identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { 1.0 } else { 0.0 })
    }
}

impl<const ROWS: usize, const COLS: usize> Zero for Matrix<ROWS, COLS> {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|v| *v == 0.0)
    }
}

impl<const N: usize> One for Matrix<N, N> {
    fn one() -> Self {
        Self::identity()
    }
}
