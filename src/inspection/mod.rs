//! Narrow read-only interface to fitted models.
//!
//! Model fitting and the extraction of covariance matrices, design
//! assignments and raw data are left to the caller, who implements
//! [`ModelInspector`] for their model type.

mod data;
mod traits;
mod vcov;

pub use data::{DataColumn, DataTable, Factor};
pub use traits::{InspectionError, ModelInspector, ParameterBlock};
pub use vcov::{Vcov, VcovBlock};
