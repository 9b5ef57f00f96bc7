use crate::error::LinfitError;
use crate::matrix::{Matrix, RowVector, Vector};
use crate::ops::linalg::transpose::Transpose;
use log::{debug, log_enabled, trace, warn, Level};

/// Initial value of the weight vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeightInit {
    /// Every weight starts at 0.
    #[default]
    Zeros,
    /// Every weight starts at the same value.
    Uniform(f64),
    /// One starting value per feature, in feature order.
    PerFeature(Vec<f64>),
}

/// Compile-time guard tying a dataset's width to the trainer's feature count.
struct DatasetWidth<const D: usize, const W: usize>;

impl<const D: usize, const W: usize> DatasetWidth<D, W> {
    const ASSERT: () = assert!(
        W == D + 1,
        "dataset must hold the feature columns followed by exactly one label column"
    );
}

/// Splits an `N x (D + 1)` dataset into its `N x D` feature block and its label column.
///
/// The width relation is checked when the function is instantiated, so a dataset
/// of the wrong width is a build error rather than a runtime one.
pub fn split_dataset<const N: usize, const D: usize, const W: usize>(
    dataset: &Matrix<N, W>,
) -> Result<(Matrix<N, D>, Vector<N>), LinfitError> {
    let () = DatasetWidth::<D, W>::ASSERT;
    let features = dataset.sub_columns::<D>(0)?;
    let labels = dataset.sub_column(D)?;
    Ok((features, labels))
}

/// Binary logistic regression over `D` features, trained by batch gradient descent.
///
/// The model owns a single weight vector and a learning rate. Only [`fit`](Self::fit)
/// changes the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression<const D: usize> {
    weight: Vector<D>,
    learning_rate: f64,
}

impl<const D: usize> LogisticRegression<D> {
    /// Creates a model with all weights set to 0.
    pub fn new(learning_rate: f64) -> Self {
        LogisticRegression {
            weight: Vector::zeros(),
            learning_rate,
        }
    }

    /// Creates a model with every weight set to `init_weight`.
    pub fn with_uniform_weight(learning_rate: f64, init_weight: f64) -> Self {
        LogisticRegression {
            weight: Vector::full(init_weight),
            learning_rate,
        }
    }

    /// Creates a model with one explicit starting weight per feature.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` if `init_weights.len() != D`.
    pub fn with_weights(learning_rate: f64, init_weights: &[f64]) -> Result<Self, LinfitError> {
        let weight = Vector::<D>::from_slice(init_weights).map_err(|_| {
            warn!(
                "Rejected {} initial weights for a {}-feature logistic regression",
                init_weights.len(),
                D
            );
            LinfitError::shape(D, init_weights.len(), "LogisticRegression::with_weights")
        })?;
        Ok(LogisticRegression {
            weight,
            learning_rate,
        })
    }

    /// Creates a model from a [`WeightInit`] value.
    ///
    /// # Errors
    /// Returns `LinfitError::ShapeMismatch` for a `PerFeature` list of the wrong length.
    pub fn with_init(learning_rate: f64, init: WeightInit) -> Result<Self, LinfitError> {
        match init {
            WeightInit::Zeros => Ok(Self::new(learning_rate)),
            WeightInit::Uniform(value) => Ok(Self::with_uniform_weight(learning_rate, value)),
            WeightInit::PerFeature(values) => Self::with_weights(learning_rate, &values),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Current weight vector.
    pub fn weight(&self) -> &Vector<D> {
        &self.weight
    }

    /// Probability that the sample `x` belongs to the positive class.
    ///
    /// Computes `1 / (1 + exp(w · x))`, i.e. the textbook logistic function of
    /// `-w · x`. [`fit`](Self::fit) steps with the same sign convention.
    pub fn possibility_positive(&self, x: &Vector<D>) -> f64 {
        let score = self.weight.dot(x);
        1.0 / (1.0 + score.exp())
    }

    /// Applies [`possibility_positive`](Self::possibility_positive) to every row
    /// of an `N x D` design matrix.
    pub fn possibility_positive_batch<const N: usize>(&self, x: &Matrix<N, D>) -> Vector<N> {
        let mut result = Vector::<N>::zeros();
        for (i, row) in x.as_array().iter().enumerate() {
            let sample = RowVector::new([*row]) ^ Transpose;
            result[i] = self.possibility_positive(&sample);
        }
        result
    }

    /// `Xᵀ · (y - p)`
    fn gradient<const N: usize>(x: &Matrix<N, D>, y: &Vector<N>, p: &Vector<N>) -> Vector<D> {
        (x ^ Transpose) * (y - p)
    }

    /// One gradient-descent step over the whole batch. Returns the gradient used.
    fn fit_once<const N: usize>(&mut self, x: &Matrix<N, D>, y: &Vector<N>) -> Vector<D> {
        let p = self.possibility_positive_batch(x);
        let g = Self::gradient(x, y, &p);
        self.weight -= g * self.learning_rate;
        g
    }

    /// Trains on `dataset` for exactly `fit_times` gradient-descent steps.
    ///
    /// `dataset` is `N x (D + 1)`: the first `D` columns are features and the last
    /// column is the 0/1 label. The split happens once; each step reuses it. There
    /// is no convergence check, and `fit_times == 0` leaves the weights untouched.
    ///
    /// A dataset whose width is not `D + 1` does not build:
    ///
    /// ```compile_fail
    /// use linfit_core::{LogisticRegression, Matrix};
    ///
    /// let dataset = Matrix::new([[1.0, 2.0, 0.0], [3.0, 4.0, 1.0]]);
    /// let mut lr = LogisticRegression::<1>::new(0.1);
    /// lr.fit(&dataset, 1).unwrap();
    /// ```
    ///
    /// ```
    /// use linfit_core::{LogisticRegression, Matrix};
    ///
    /// let dataset = Matrix::new([[1.0, 0.0], [2.0, 1.0]]);
    /// let mut lr = LogisticRegression::<1>::new(0.1);
    /// lr.fit(&dataset, 1).unwrap();
    /// assert!((lr.weight()[0] + 0.05).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    /// Propagates `LinfitError` from splitting the dataset. With the width checked at
    /// build time this does not occur in practice.
    pub fn fit<const N: usize, const W: usize>(
        &mut self,
        dataset: &Matrix<N, W>,
        fit_times: usize,
    ) -> Result<(), LinfitError> {
        let (features, labels) = split_dataset::<N, D, W>(dataset)?;
        debug!(
            "Fitting logistic regression: samples={}, features={}, fit_times={}, learning_rate={}",
            N, D, fit_times, self.learning_rate
        );

        for iteration in 0..fit_times {
            let gradient = self.fit_once(&features, &labels);
            if log_enabled!(Level::Trace) {
                trace!("iteration {}: |gradient| = {}", iteration, gradient.abs());
            }
        }

        debug!("Fit finished, weight = [{}]", self.weight ^ Transpose);
        Ok(())
    }
}

#[cfg(test)]
#[path = "logistic_regression_test.rs"]
mod tests;
