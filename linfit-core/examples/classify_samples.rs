//! # Classifying two samples with a fixed-shape logistic regression
//!
//! Trains a 5-feature model on 9 labelled samples with plain batch gradient
//! descent, then scores two unlabelled samples.
//!
//! ## Running
//! `cargo run --example classify_samples`

use linfit_core::{LinfitError, LogisticRegression, Matrix, Transpose, Vector};

const DECISION_THRESHOLD: f64 = 0.5;

const DATA_NUMBER: usize = 9;
const DIMENSION: usize = 5;

/// Raw samples: five features followed by the 0/1 label.
fn raw_data() -> Matrix<DATA_NUMBER, { DIMENSION + 1 }> {
    Matrix::new([
        [4.0, 3.4, 100.0, 3.0, 10.0, 1.0],
        [6.0, 4.1, 210.0, 1.0, 8.0, 1.0],
        [8.0, 6.7, 600.0, 2.0, 16.0, 0.0],
        [10.0, 8.5, 1600.0, 6.0, 11.0, 0.0],
        [5.0, 4.8, 150.0, 13.0, 12.0, 0.0],
        [18.0, 15.6, 120.0, 21.0, 20.0, 1.0],
        [2.0, 3.4, 80.0, 1.0, 10.0, 1.0],
        [12.0, 7.9, 600.0, 4.0, 11.0, 0.0],
        [16.0, 12.0, 780.0, 8.0, 8.0, 0.0],
    ])
}

fn label(possibility: f64) -> &'static str {
    if possibility >= DECISION_THRESHOLD {
        "Positive"
    } else {
        "Negative"
    }
}

fn main() -> Result<(), LinfitError> {
    let sample10 = Vector::<DIMENSION>::from_slice(&[9.0, 15.0, 800.0, 7.0, 16.0])?;
    let sample11 = Vector::<DIMENSION>::from_slice(&[3.0, 4.2, 189.0, 11.0, 7.0])?;

    let fit_times = 100_000;
    let learning_rate = 0.1;

    let mut lr = LogisticRegression::<DIMENSION>::with_uniform_weight(learning_rate, 1.0);

    println!("RawData: {} * {}", DATA_NUMBER, DIMENSION);
    println!("{}", raw_data());
    println!();

    println!("InitWeight = [{}]", lr.weight() ^ Transpose);
    println!("FitTimes = {}", fit_times);
    println!("LearningRate = {}", learning_rate);
    println!("DecisionThreshold = {}", DECISION_THRESHOLD);
    println!();

    lr.fit(&raw_data(), fit_times)?;

    let possibility10 = lr.possibility_positive(&sample10);
    let possibility11 = lr.possibility_positive(&sample11);

    println!("ResultWeight = [{}]", lr.weight() ^ Transpose);
    println!();

    println!("Sample10 = [{}]", sample10 ^ Transpose);
    println!("Possibility = {}, {}", possibility10, label(possibility10));
    println!();

    println!("Sample11 = [{}]", sample11 ^ Transpose);
    println!("Possibility = {}, {}", possibility11, label(possibility11));
    println!();

    Ok(())
}
