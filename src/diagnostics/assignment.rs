//! Coefficient-to-term assignment per model family.
//!
//! The assignment says which predictor term each coefficient column belongs
//! to: 0 for the intercept, 1..=n_terms otherwise, with every dummy column of
//! a categorical predictor sharing its predictor's index.
//!
//! Models normally expose this through their design matrix. When they do
//! not (or the native mapping does not fit the covariance matrix), the
//! mapping is rebuilt from the raw data: categorical predictors are expanded
//! into one synthetic name per non-reference level, and the model's cleaned
//! parameter names are matched against those names exactly.

use super::error::{CollinearityError, MissingPredictor};
use crate::core::{Component, ModelFamily, ModelPart};
use crate::inspection::{DataColumn, DataTable, ModelInspector, ParameterBlock};
use std::collections::HashMap;

/// Parameter block holding the design assignment of `part` for `family`.
fn assignment_block(
    family: ModelFamily,
    part: ModelPart,
) -> Result<ParameterBlock, CollinearityError> {
    match (family, part) {
        (ModelFamily::Plain, ModelPart::Conditional) => Ok(ParameterBlock::Model),
        (ModelFamily::Plain, ModelPart::ZeroInflated) => {
            Err(CollinearityError::UnsupportedComponent {
                component: Component::from(part),
                family,
            })
        }
        (ModelFamily::TwoPartCount, ModelPart::Conditional) => Ok(ParameterBlock::Count),
        (ModelFamily::TwoPartCount, ModelPart::ZeroInflated) => Ok(ParameterBlock::Zero),
        (ModelFamily::MixedTwoPart, ModelPart::Conditional) => Ok(ParameterBlock::FixedEffects),
        (ModelFamily::MixedTwoPart, ModelPart::ZeroInflated) => {
            Ok(ParameterBlock::ZeroInflationFixedEffects)
        }
        (ModelFamily::ZeroInflatedMixed, ModelPart::Conditional) => Ok(ParameterBlock::Model),
        (ModelFamily::ZeroInflatedMixed, ModelPart::ZeroInflated) => {
            Ok(ParameterBlock::ZeroInflation)
        }
    }
}

/// Resolve the term assignment of the `n_columns` covariance columns of `part`.
///
/// Uses the model's native design assignment when it is present and covers
/// every column; otherwise falls back to [`reconstruct_term_assignment`].
pub fn resolve_term_assignment<M: ModelInspector + ?Sized>(
    model: &M,
    part: ModelPart,
    n_columns: usize,
) -> Result<Vec<usize>, CollinearityError> {
    let block = assignment_block(model.family(), part)?;

    match model.design_assignment(block) {
        Ok(Some(assignment)) if !assignment.is_empty() && assignment.len() == n_columns => {
            return Ok(assignment);
        }
        Ok(Some(assignment)) => log::debug!(
            "{block} design assignment has {} entries for {n_columns} columns; rebuilding from data",
            assignment.len()
        ),
        Ok(None) => log::debug!("no {block} design assignment; rebuilding from data"),
        Err(e) => log::debug!("{block} design assignment failed ({e}); rebuilding from data"),
    }

    let assignment = reconstruct_term_assignment(model, part)?;
    if assignment.len() != n_columns {
        return Err(CollinearityError::term_mapping(
            part,
            format!(
                "{} parameters for {n_columns} covariance columns",
                assignment.len()
            ),
        ));
    }

    Ok(assignment)
}

/// Rebuild the term assignment of `part` from the model's raw data.
///
/// Every cleaned parameter name of `part` must match a synthetic name
/// exactly; any leftover name is a hard failure.
pub fn reconstruct_term_assignment<M: ModelInspector + ?Sized>(
    model: &M,
    part: ModelPart,
) -> Result<Vec<usize>, CollinearityError> {
    let failed = |e: &dyn std::fmt::Display| CollinearityError::term_mapping(part, e.to_string());

    let predictors = model.predictors(part).map_err(|e| failed(&e))?;
    let data = model.raw_data().map_err(|e| failed(&e))?;
    let intercept = model.has_intercept().then(|| model.intercept_name());

    let synthetic =
        synthetic_parameter_names(&predictors, data, intercept).map_err(|e| failed(&e))?;

    let parameters = model
        .cleaned_parameter_names(part)
        .map_err(|e| failed(&e))?;

    parameters
        .iter()
        .map(|name| {
            synthetic.get(name.as_str()).copied().ok_or_else(|| {
                CollinearityError::term_mapping(
                    part,
                    format!("parameter '{name}' does not match any predictor"),
                )
            })
        })
        .collect()
}

/// Build the synthetic parameter-name table for `predictors`.
///
/// Numeric predictors keep their own name; categorical predictors get
/// `predictor + level` for each non-reference level. Every name carries the
/// predictor's 1-based position. The intercept, if given, maps to 0. When
/// two predictors produce the same name the earlier one wins.
pub fn synthetic_parameter_names(
    predictors: &[String],
    data: &DataTable,
    intercept: Option<&str>,
) -> Result<HashMap<String, usize>, MissingPredictor> {
    let mut names = HashMap::new();
    if let Some(intercept) = intercept {
        names.insert(intercept.to_string(), 0);
    }

    for (i, predictor) in predictors.iter().enumerate() {
        let term = i + 1;
        let column = data
            .column(predictor)
            .ok_or_else(|| MissingPredictor {
                predictor: predictor.clone(),
            })?;

        match column {
            DataColumn::Categorical(factor) => {
                for level in factor.non_reference_levels() {
                    names.entry(format!("{predictor}{level}")).or_insert(term);
                }
            }
            DataColumn::Numeric(_) => {
                names.entry(predictor.clone()).or_insert(term);
            }
        }
    }

    Ok(names)
}
