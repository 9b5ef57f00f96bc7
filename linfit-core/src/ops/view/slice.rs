// linfit-core/src/ops/view/slice.rs

use crate::error::LinfitError;
use crate::matrix::{ColumnVector, Matrix, RowVector};

/// Checks that a block of `size` entries starting at `index` fits in `dim`.
///
/// This is the only runtime check in the view operations: the block size is a
/// const generic, but the start index is only known at the call.
fn check_block(index: usize, size: usize, dim: usize, operation: &str) -> Result<(), LinfitError> {
    match index.checked_add(size) {
        Some(end) if end <= dim => Ok(()),
        _ => Err(LinfitError::OutOfRange {
            index,
            size,
            dim,
            operation: operation.to_string(),
        }),
    }
}

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Copies the single row at `index`.
    ///
    /// # Errors
    /// Returns `LinfitError::OutOfRange` if `index >= ROWS`.
    pub fn sub_row(&self, index: usize) -> Result<RowVector<COLS>, LinfitError> {
        check_block(index, 1, ROWS, "sub_row")?;
        Ok(Matrix::new([self.data[index]]))
    }

    /// Copies `N` contiguous rows starting at `index`.
    ///
    /// # Errors
    /// Returns `LinfitError::OutOfRange` if `index + N > ROWS`.
    pub fn sub_rows<const N: usize>(&self, index: usize) -> Result<Matrix<N, COLS>, LinfitError> {
        check_block(index, N, ROWS, "sub_rows")?;
        let mut result = Matrix::<N, COLS>::zeros();
        result.data.copy_from_slice(&self.data[index..index + N]);
        Ok(result)
    }

    /// Copies the single column at `index`.
    ///
    /// # Errors
    /// Returns `LinfitError::OutOfRange` if `index >= COLS`.
    pub fn sub_column(&self, index: usize) -> Result<ColumnVector<ROWS>, LinfitError> {
        check_block(index, 1, COLS, "sub_column")?;
        let mut result = ColumnVector::<ROWS>::zeros();
        for (dst, row) in result.data.iter_mut().zip(self.data.iter()) {
            dst[0] = row[index];
        }
        Ok(result)
    }

    /// Copies `N` contiguous columns starting at `index`.
    ///
    /// # Errors
    /// Returns `LinfitError::OutOfRange` if `index + N > COLS`.
    pub fn sub_columns<const N: usize>(&self, index: usize) -> Result<Matrix<ROWS, N>, LinfitError> {
        check_block(index, N, COLS, "sub_columns")?;
        let mut result = Matrix::<ROWS, N>::zeros();
        for (dst, row) in result.data.iter_mut().zip(self.data.iter()) {
            dst.copy_from_slice(&row[index..index + N]);
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
