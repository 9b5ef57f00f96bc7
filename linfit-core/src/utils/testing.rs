use crate::matrix::Matrix;

/// Checks that a matrix matches an expected row-major literal within `tolerance`.
/// Panics with the offending position if any entry differs by more than that.
pub fn check_matrix_near<const ROWS: usize, const COLS: usize>(
    actual: &Matrix<ROWS, COLS>,
    expected: &[[f64; COLS]; ROWS],
    tolerance: f64,
) {
    for (i, (actual_row, expected_row)) in actual.as_array().iter().zip(expected.iter()).enumerate() {
        for (j, (a, e)) in actual_row.iter().zip(expected_row.iter()).enumerate() {
            let diff = (a - e).abs();
            if diff > tolerance || diff.is_nan() {
                panic!(
                    "Data mismatch at ({}, {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                    i, j, a, e, diff, tolerance
                );
            }
        }
    }
}
