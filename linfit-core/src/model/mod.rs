// src/model/mod.rs

pub mod logistic_regression;

pub use logistic_regression::{split_dataset, LogisticRegression, WeightInit};
