// src/ops/view/mod.rs

// Sub-block extraction (sub_row, sub_rows, sub_column, sub_columns).
pub mod slice;
