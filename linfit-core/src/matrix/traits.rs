// src/matrix/traits.rs
//
// Approximate equality so matrices can be compared with the `approx` macros
// (`assert_relative_eq!(a, b, epsilon = 1e-9)`), entry by entry.

use crate::matrix::Matrix;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

impl<const ROWS: usize, const COLS: usize> AbsDiffEq for Matrix<ROWS, COLS> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        <f64 as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const ROWS: usize, const COLS: usize> RelativeEq for Matrix<ROWS, COLS> {
    fn default_max_relative() -> f64 {
        <f64 as RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const ROWS: usize, const COLS: usize> UlpsEq for Matrix<ROWS, COLS> {
    fn default_max_ulps() -> u32 {
        <f64 as UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
