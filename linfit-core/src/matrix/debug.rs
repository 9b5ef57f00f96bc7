// src/matrix/debug.rs
use crate::matrix::Matrix;
use std::fmt;

/// Row-major dump: one line per row, entries separated by a single space.
/// No trailing newline is written after the last row.
impl<const ROWS: usize, const COLS: usize> fmt::Display for Matrix<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

// Manual implementation of Debug trait
impl<const ROWS: usize, const COLS: usize> fmt::Debug for Matrix<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix<{}x{}>(", ROWS, COLS)?;
        f.debug_list().entries(self.data.iter()).finish()?;
        write!(f, ")")
    }
}
