//! Fixed-shape matrix algebra and a gradient-descent logistic-regression trainer.
//!
//! Every [`Matrix`] carries its row and column counts as const generic
//! parameters, so operand shapes of `+`, `-` and `*` are checked by the
//! compiler. Only constructors taking runtime-length lists and sub-block
//! extraction at a runtime index can fail, with a [`LinfitError`].
//!
//! ```
//! use linfit_core::{Matrix, Transpose};
//!
//! let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let t = a ^ Transpose;
//! assert_eq!(t[(2, 1)], 6.0);
//! let gram = a * t;
//! assert_eq!(gram[(0, 0)], 14.0);
//! ```

pub mod error;
pub mod matrix;
pub mod model;
pub mod ops;
pub mod utils;

pub use error::LinfitError;
pub use matrix::{ColumnVector, Matrix, RowVector, Vector};
pub use model::logistic_regression::{LogisticRegression, WeightInit};
pub use ops::linalg::transpose::Transpose;

// Re-export traits required by public functions/structs
pub use approx;
pub use num_traits;
