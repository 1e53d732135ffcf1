//! Coefficient covariance extraction per model family.

use super::error::CollinearityError;
use crate::core::{Component, ModelFamily, ModelPart};
use crate::inspection::{ModelInspector, ParameterBlock, Vcov};
use faer::Mat;

/// Parameter block holding the covariance of `part` for `family`.
fn covariance_block(
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
        (ModelFamily::ZeroInflatedMixed, _) => Ok(ParameterBlock::Model),
    }
}

/// Extract the coefficient covariance matrix of `part`.
///
/// Whole-model covariances that come back split into named blocks are
/// sliced to the block for `part`; a single matrix is returned unchanged.
pub fn extract_covariance<M: ModelInspector + ?Sized>(
    model: &M,
    part: ModelPart,
) -> Result<Mat<f64>, CollinearityError> {
    let family = model.family();
    let block = covariance_block(family, part)?;

    let matrix = match model.coefficient_covariance(block)? {
        Vcov::Full(matrix) => matrix,
        vcov @ Vcov::Blocks(_) => vcov.block(part.block_names()).cloned().ok_or_else(|| {
            CollinearityError::UnsupportedComponent {
                component: Component::from(part),
                family,
            }
        })?,
    };

    if matrix.nrows() != matrix.ncols() {
        return Err(CollinearityError::NonSquareCovariance {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }

    Ok(matrix)
}
