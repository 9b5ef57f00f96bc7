// src/ops/linalg/mod.rs

pub mod matmul;
pub mod transpose;

pub use matmul::matmul;
pub use transpose::Transpose;
