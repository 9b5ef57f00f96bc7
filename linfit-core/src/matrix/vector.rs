// src/matrix/vector.rs

use crate::error::LinfitError;
use crate::matrix::Matrix;
use std::ops::{Index, IndexMut};

/// A matrix with a single row.
pub type RowVector<const N: usize> = Matrix<1, N>;

/// A matrix with a single column.
pub type ColumnVector<const N: usize> = Matrix<N, 1>;

/// Vectors are columns unless stated otherwise.
pub type Vector<const N: usize> = ColumnVector<N>;

/// Compile-time guard for operations that only make sense on vectors.
///
/// Referencing `VectorShape::<R, C>::ASSERT` from a generic function turns a call
/// on a shape with neither dimension equal to 1 into a build error when the
/// function is instantiated.
pub(crate) struct VectorShape<const ROWS: usize, const COLS: usize>;

impl<const ROWS: usize, const COLS: usize> VectorShape<ROWS, COLS> {
    pub(crate) const ASSERT: () = assert!(
        ROWS == 1 || COLS == 1,
        "operation requires a row vector or a column vector"
    );
}

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Length of a row or column vector, i.e. whichever dimension is not 1.
    ///
    /// ```
    /// use linfit_core::{Matrix, RowVector};
    ///
    /// assert_eq!(RowVector::<4>::zeros().rank(), 4);
    /// assert_eq!(Matrix::<1, 1>::zeros().rank(), 1);
    /// ```
    ///
    /// Calling it on a matrix with no dimension equal to 1 does not build:
    ///
    /// ```compile_fail
    /// use linfit_core::Matrix;
    ///
    /// let m = Matrix::<2, 2>::zeros();
    /// let _ = m.rank();
    /// ```
    pub const fn rank(&self) -> usize {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        if ROWS == 1 {
            COLS
        } else {
            ROWS
        }
    }

    /// Euclidean norm of a row or column vector.
    pub fn abs(&self) -> f64 {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        self.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Dot product of two vectors of the same shape.
    pub fn dot(&self, other: &Self) -> f64 {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Builds a row or column vector from a flat list.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` if `values.len()` differs from the
    /// vector's length.
    pub fn from_slice(values: &[f64]) -> Result<Self, LinfitError> {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        let expected = ROWS * COLS;
        if values.len() != expected {
            return Err(LinfitError::shape(expected, values.len(), "from_slice"));
        }
        let mut result = Self::zeros();
        result
            .iter_mut()
            .zip(values.iter())
            .for_each(|(dst, src)| *dst = *src);
        Ok(result)
    }
}

/// Linear access into a row or column vector.
impl<const ROWS: usize, const COLS: usize> Index<usize> for Matrix<ROWS, COLS> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        if ROWS == 1 {
            &self.data[0][index]
        } else {
            &self.data[index][0]
        }
    }
}

impl<const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<ROWS, COLS> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        let () = VectorShape::<ROWS, COLS>::ASSERT;
        if ROWS == 1 {
            &mut self.data[0][index]
        } else {
            &mut self.data[index][0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rank_row_and_column() {
        let row = RowVector::<4>::zeros();
        let col = ColumnVector::<3>::zeros();
        let one = Matrix::<1, 1>::zeros();
        assert_eq!(row.rank(), 4);
        assert_eq!(col.rank(), 3);
        assert_eq!(one.rank(), 1);
    }

    #[test]
    fn test_abs_is_euclidean_norm() {
        let v = Vector::<2>::from_slice(&[3.0, 4.0]).unwrap();
        assert_relative_eq!(v.abs(), 5.0);
        let r = RowVector::<3>::new([[1.0, 2.0, 2.0]]);
        assert_relative_eq!(r.abs(), 3.0);
    }

    #[test]
    fn test_linear_index_column() {
        let mut v = Vector::<3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v[2], 3.0);
        v[0] = 10.0;
        assert_eq!(v[(0, 0)], 10.0);
    }

    #[test]
    fn test_linear_index_row() {
        let r = RowVector::<3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r[1], 2.0);
        assert_eq!(r[(0, 1)], 2.0);
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        let result = Vector::<3>::from_slice(&[1.0, 2.0]);
        assert_eq!(
            result,
            Err(LinfitError::ShapeMismatch {
                expected: 3,
                actual: 2,
                operation: "from_slice".to_string(),
            })
        );
        assert!(RowVector::<2>::from_slice(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_dot() {
        let a = Vector::<3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        let b = Vector::<3>::from_slice(&[4.0, -5.0, 6.0]).unwrap();
        assert_relative_eq!(a.dot(&b), 12.0);
    }
}
