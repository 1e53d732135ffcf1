//! Multicollinearity diagnostics for fitted models.
//!
//! A check runs in three steps per model part:
//!
//! - **Covariance**: extract the coefficient covariance for the part
//! - **Assignment**: map each coefficient column to its predictor term,
//!   rebuilding the map from raw data when the model does not expose it
//! - **VIF**: turn both into one inflation factor per term
//!
//! # Example
//!
//! ```rust,ignore
//! use collinearity::diagnostics::{check_collinearity, high_vif_terms};
//!
//! let report = check_collinearity(&model, Component::Conditional)?;
//! let vif: Vec<f64> = report.rows.iter().map(|r| r.vif).collect();
//! let collinear = high_vif_terms(&vif, 10.0);
//! ```

mod assignment;
mod collinearity;
mod covariance;
mod error;
mod vif;

pub use assignment::{
    reconstruct_term_assignment, resolve_term_assignment, synthetic_parameter_names,
};
pub use collinearity::{check_collinearity, CollinearityChecker, CollinearityCheckerBuilder};
pub use covariance::extract_covariance;
pub use error::{CollinearityError, MissingPredictor};
pub use vif::{compute_collinearity, covariance_to_correlation, high_vif_terms, term_vif};
