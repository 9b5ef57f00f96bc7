use approx::assert_relative_eq;
use linfit_core::{LinfitError, LogisticRegression, Matrix, Vector, WeightInit};

mod common;
use common::seeded_rng;

// The 9-sample, 5-feature dataset used by the classify_samples example; last column is the label.
fn sample_dataset() -> Matrix<9, 6> {
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

#[test]
fn test_single_step_reference_value() -> Result<(), LinfitError> {
    let dataset = Matrix::new([[1.0, 0.0], [2.0, 1.0]]);
    let mut lr = LogisticRegression::<1>::with_weights(0.1, &[0.0])?;
    lr.fit(&dataset, 1)?;
    assert_relative_eq!(lr.weight()[0], -0.05, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_two_steps_follow_the_update_rule() -> Result<(), LinfitError> {
    let dataset = Matrix::new([[1.0, 0.0], [2.0, 1.0]]);
    let mut lr = LogisticRegression::<1>::new(0.1);
    lr.fit(&dataset, 2)?;

    // Second step by hand from w = -0.05.
    let w: f64 = -0.05;
    let p1 = 1.0 / (1.0 + (w * 1.0).exp());
    let p2 = 1.0 / (1.0 + (w * 2.0).exp());
    let g = 1.0 * (0.0 - p1) + 2.0 * (1.0 - p2);
    assert_relative_eq!(lr.weight()[0], w - 0.1 * g, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_fit_zero_times_is_identity() -> Result<(), LinfitError> {
    let mut lr = LogisticRegression::<5>::with_init(0.1, WeightInit::PerFeature(vec![0.1, -0.2, 0.3, -0.4, 0.5]))?;
    let before = lr.clone();
    lr.fit(&sample_dataset(), 0)?;
    assert_eq!(lr, before);
    Ok(())
}

#[test]
fn test_fit_is_deterministic() -> Result<(), LinfitError> {
    let mut first = LogisticRegression::<5>::with_uniform_weight(0.001, 0.0);
    let mut second = first.clone();
    first.fit(&sample_dataset(), 200)?;
    second.fit(&sample_dataset(), 200)?;
    assert_eq!(first.weight().as_array(), second.weight().as_array());
    Ok(())
}

#[test]
fn test_fit_in_two_calls_equals_one_call() -> Result<(), LinfitError> {
    let mut once = LogisticRegression::<5>::new(0.0005);
    let mut twice = once.clone();
    once.fit(&sample_dataset(), 50)?;
    twice.fit(&sample_dataset(), 20)?;
    twice.fit(&sample_dataset(), 30)?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_wrong_weight_count() {
    let result = LogisticRegression::<3>::with_weights(0.1, &[1.0, 2.0]);
    assert!(matches!(result, Err(LinfitError::ShapeMismatch { expected: 3, actual: 2, .. })));
}

#[test]
fn test_possibility_in_open_unit_interval() -> Result<(), LinfitError> {
    let mut rng = seeded_rng(5);
    let lr = LogisticRegression::<3>::with_weights(0.1, &[0.5, -1.5, 2.0])?;
    for _ in 0..200 {
        let x = Vector::<3>::rand_uniform(&mut rng, -5.0, 5.0)?;
        let p = lr.possibility_positive(&x);
        assert!(p > 0.0 && p < 1.0, "possibility {} outside (0, 1)", p);
    }
    Ok(())
}

#[test]
fn test_possibility_non_increasing_in_score() -> Result<(), LinfitError> {
    let lr = LogisticRegression::<1>::with_weights(0.1, &[1.0])?;
    let mut previous = f64::INFINITY;
    for step in -40..=40 {
        let x = Vector::<1>::from_slice(&[step as f64 * 0.5])?;
        let p = lr.possibility_positive(&x);
        assert!(p <= previous, "possibility increased at score {}", step as f64 * 0.5);
        previous = p;
    }
    Ok(())
}

#[test]
fn test_batch_possibility_over_dataset_features() -> Result<(), LinfitError> {
    let lr = LogisticRegression::<5>::new(0.1);
    let features = sample_dataset().sub_columns::<5>(0)?;
    let p = lr.possibility_positive_batch(&features);
    assert_eq!(p.rank(), 9);
    assert!(p.iter().all(|v| *v == 0.5));
    Ok(())
}
