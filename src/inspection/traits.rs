//! The model inspection interface.

use super::data::DataTable;
use super::vcov::Vcov;
use crate::core::{ModelFamily, ModelPart};
use std::fmt;
use thiserror::Error;

/// Errors a model inspector can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectionError {
    #[error("{what} is not available for this model")]
    Unavailable { what: String },

    #[error("model inspection failed: {0}")]
    Other(String),
}

impl InspectionError {
    /// Shorthand for [`InspectionError::Unavailable`].
    pub fn unavailable(what: impl Into<String>) -> Self {
        InspectionError::Unavailable { what: what.into() }
    }
}

/// Family-specific parameter scope used when asking a model for its
/// covariance matrix or design-matrix assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterBlock {
    /// The whole model. Covariance may come back split into named blocks.
    Model,
    /// "count" sub-model of a two-part count model.
    Count,
    /// "zero" sub-model of a two-part count model.
    Zero,
    /// "fixed" effects of a mixed two-part model.
    FixedEffects,
    /// "zi_fixed" effects of a mixed two-part model.
    ZeroInflationFixedEffects,
    /// Zero-inflation design of a zero-inflated mixed model.
    ZeroInflation,
}

impl fmt::Display for ParameterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterBlock::Model => "model",
            ParameterBlock::Count => "count",
            ParameterBlock::Zero => "zero",
            ParameterBlock::FixedEffects => "fixed",
            ParameterBlock::ZeroInflationFixedEffects => "zi_fixed",
            ParameterBlock::ZeroInflation => "zi",
        };
        f.write_str(name)
    }
}

/// Read-only view of a fitted regression model.
///
/// Implementations wrap whatever model representation the caller has. None
/// of the methods may mutate the model; the checks only ever borrow it.
pub trait ModelInspector {
    /// The family the model belongs to.
    fn family(&self) -> ModelFamily;

    /// Whether the model was fit with an intercept.
    fn has_intercept(&self) -> bool;

    /// Name of the intercept parameter in [`Self::cleaned_parameter_names`].
    fn intercept_name(&self) -> &str {
        "(Intercept)"
    }

    /// Predictor terms of `part`, in formula order, before dummy expansion.
    fn predictors(&self, part: ModelPart) -> Result<Vec<String>, InspectionError>;

    /// Coefficient covariance matrix for `block`.
    fn coefficient_covariance(&self, block: ParameterBlock) -> Result<Vcov, InspectionError>;

    /// Design-matrix column-to-term assignment for `block`.
    ///
    /// `Ok(None)` means the model does not expose one. Entries are 0 for the
    /// intercept and 1-based term indices otherwise.
    fn design_assignment(
        &self,
        block: ParameterBlock,
    ) -> Result<Option<Vec<usize>>, InspectionError>;

    /// Raw predictor data the model was fit on.
    fn raw_data(&self) -> Result<&DataTable, InspectionError>;

    /// Cleaned coefficient names of `part`, aligned with its covariance columns.
    fn cleaned_parameter_names(&self, part: ModelPart) -> Result<Vec<String>, InspectionError>;
}

impl<M: ModelInspector + ?Sized> ModelInspector for &M {
    fn family(&self) -> ModelFamily {
        (**self).family()
    }

    fn has_intercept(&self) -> bool {
        (**self).has_intercept()
    }

    fn intercept_name(&self) -> &str {
        (**self).intercept_name()
    }

    fn predictors(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        (**self).predictors(part)
    }

    fn coefficient_covariance(&self, block: ParameterBlock) -> Result<Vcov, InspectionError> {
        (**self).coefficient_covariance(block)
    }

    fn design_assignment(
        &self,
        block: ParameterBlock,
    ) -> Result<Option<Vec<usize>>, InspectionError> {
        (**self).design_assignment(block)
    }

    fn raw_data(&self) -> Result<&DataTable, InspectionError> {
        (**self).raw_data()
    }

    fn cleaned_parameter_names(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        (**self).cleaned_parameter_names(part)
    }
}
