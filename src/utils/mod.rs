//! Shared helpers.

mod matrix;

pub use matrix::{complement_indices, determinant, drop_row_col, principal_submatrix};
