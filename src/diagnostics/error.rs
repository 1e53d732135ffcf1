//! Errors raised by collinearity checks.

use crate::core::{Component, ModelFamily, OptionsError};
use crate::inspection::InspectionError;
use thiserror::Error;

/// Errors that abort a collinearity check.
///
/// Conditions that only make the result less useful (no intercept, too few
/// terms) are reported as [`crate::core::Diagnostic`]s instead.
#[derive(Debug, Error)]
pub enum CollinearityError {
    #[error("component '{component}' is not available for {family} models")]
    UnsupportedComponent {
        component: Component,
        family: ModelFamily,
    },

    #[error("could not map coefficients to terms for the {component} component: {reason}")]
    TermMappingFailed {
        component: Component,
        reason: String,
    },

    #[error("covariance matrix must be square, got {rows}x{cols}")]
    NonSquareCovariance { rows: usize, cols: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error(transparent)]
    Inspection(#[from] InspectionError),
}

/// A predictor named by the model has no column in its raw data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("predictor '{predictor}' not found in model data")]
pub struct MissingPredictor {
    pub predictor: String,
}

impl CollinearityError {
    pub(crate) fn term_mapping(component: impl Into<Component>, reason: impl Into<String>) -> Self {
        CollinearityError::TermMappingFailed {
            component: component.into(),
            reason: reason.into(),
        }
    }
}
