//! Multicollinearity diagnostics for fitted regression models.
//!
//! This library computes variance inflation factors (VIF) per predictor
//! term from a model's coefficient covariance matrix. It handles plain
//! linear/generalized models as well as two-part count models (hurdle,
//! zero-inflated) and their mixed-effects variants, where the conditional
//! and zero-inflation parts can be checked separately or together.
//!
//! Models are accessed through the [`inspection::ModelInspector`] trait;
//! fitting and raw extraction stay with the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use collinearity::prelude::*;
//!
//! let report = check_collinearity(&model, Component::All)?;
//!
//! for row in &report.rows {
//!     println!("{} ({:?}): VIF = {:.2}", row.term, row.component, row.vif);
//! }
//! ```

pub mod core;
pub mod diagnostics;
pub mod inspection;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CollinearityLevel, CollinearityOptions, CollinearityOptionsBuilder, CollinearityReport,
        CollinearityRow, Component, Diagnostic, ModelFamily, ModelPart, OptionsError,
        ParseComponentError,
    };
    pub use crate::diagnostics::{
        check_collinearity, compute_collinearity, covariance_to_correlation, extract_covariance,
        high_vif_terms, reconstruct_term_assignment, resolve_term_assignment, term_vif,
        CollinearityChecker, CollinearityCheckerBuilder, CollinearityError, MissingPredictor,
    };
    pub use crate::inspection::{
        DataColumn, DataTable, Factor, InspectionError, ModelInspector, ParameterBlock, Vcov,
        VcovBlock,
    };
}

pub use crate::core::{CollinearityReport, CollinearityRow, Component, Diagnostic, ModelFamily};
pub use crate::diagnostics::{check_collinearity, CollinearityChecker, CollinearityError};
pub use crate::inspection::ModelInspector;
