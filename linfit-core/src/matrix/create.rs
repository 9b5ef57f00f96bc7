// src/matrix/create.rs

use crate::error::LinfitError;
use crate::matrix::{ColumnVector, Matrix, RowVector};
use rand::Rng;
use rand_distr::{Distribution, Normal};

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Creates a matrix from a list of rows.
    ///
    /// Accepts anything that yields rows viewable as `&[f64]`: nested `Vec`s,
    /// arrays of arrays, slices of slices.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` if the number of rows differs from
    /// `ROWS`, or if any row's length differs from `COLS`.
    pub fn from_rows<I, Row>(rows: I) -> Result<Self, LinfitError>
    where
        I: IntoIterator<Item = Row>,
        I::IntoIter: ExactSizeIterator,
        Row: AsRef<[f64]>,
    {
        let rows = rows.into_iter();
        if rows.len() != ROWS {
            return Err(LinfitError::shape(ROWS, rows.len(), "from_rows (row count)"));
        }

        let mut result = Self::zeros();
        for (dst, row) in result.data.iter_mut().zip(rows) {
            let row = row.as_ref();
            if row.len() != COLS {
                return Err(LinfitError::shape(COLS, row.len(), "from_rows (column count)"));
            }
            dst.copy_from_slice(row);
        }
        Ok(result)
    }

    /// Stacks single-row matrices on top of each other.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` if `rows.len() != ROWS`.
    pub fn from_row_vectors(rows: &[RowVector<COLS>]) -> Result<Self, LinfitError> {
        if rows.len() != ROWS {
            return Err(LinfitError::shape(ROWS, rows.len(), "from_row_vectors"));
        }
        let mut result = Self::zeros();
        for (dst, row) in result.data.iter_mut().zip(rows.iter()) {
            *dst = row.data[0];
        }
        Ok(result)
    }

    /// Places single-column matrices side by side.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` if `cols.len() != COLS`.
    pub fn from_column_vectors(cols: &[ColumnVector<ROWS>]) -> Result<Self, LinfitError> {
        if cols.len() != COLS {
            return Err(LinfitError::shape(COLS, cols.len(), "from_column_vectors"));
        }
        let mut result = Self::zeros();
        for (j, col) in cols.iter().enumerate() {
            for i in 0..ROWS {
                result.data[i][j] = col.data[i][0];
            }
        }
        Ok(result)
    }

    /// Creates a matrix with entries drawn uniformly from `[low, high)`.
    ///
    /// # Errors
    /// Returns `LinfitError::InvalidArgument` if the range is empty or not finite.
    pub fn rand_uniform<R: Rng + ?Sized>(
        rng: &mut R,
        low: f64,
        high: f64,
    ) -> Result<Self, LinfitError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(LinfitError::InvalidArgument(format!(
                "rand_uniform requires a finite range with low < high, got [{}, {})",
                low, high
            )));
        }
        Ok(Self::from_fn(|_, _| rng.gen_range(low..high)))
    }

    /// Creates a matrix with entries drawn from a normal distribution.
    ///
    /// # Errors
    /// Returns `LinfitError::InvalidArgument` if `std_dev` is negative or not finite.
    pub fn randn<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Result<Self, LinfitError> {
        if !(std_dev >= 0.0 && std_dev.is_finite()) {
            return Err(LinfitError::InvalidArgument(format!(
                "randn requires a finite, non-negative std_dev, got {}",
                std_dev
            )));
        }
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            LinfitError::InvalidArgument(format!(
                "randn(mean={}, std_dev={}): {}",
                mean, std_dev, e
            ))
        })?;
        Ok(Self::from_fn(|_, _| normal.sample(&mut *rng)))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
