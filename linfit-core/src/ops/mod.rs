// src/ops/mod.rs

pub mod arithmetic;
pub mod linalg;
pub mod view;
