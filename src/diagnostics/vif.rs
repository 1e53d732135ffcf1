//! Variance Inflation Factor (VIF) for multicollinearity detection.

use super::error::CollinearityError;
use crate::core::{CollinearityReport, CollinearityRow, Diagnostic, ModelPart};
use crate::utils::{complement_indices, determinant, drop_row_col, principal_submatrix};
use faer::Mat;

/// Normalize a covariance matrix to unit diagonal.
///
/// R[i, j] = cov[i, j] / sqrt(cov[i, i] * cov[j, j])
pub fn covariance_to_correlation(cov: &Mat<f64>) -> Mat<f64> {
    let sd: Vec<f64> = (0..cov.nrows()).map(|i| cov[(i, i)].sqrt()).collect();
    Mat::from_fn(cov.nrows(), cov.ncols(), |i, j| {
        cov[(i, j)] / (sd[i] * sd[j])
    })
}

/// Compute one (generalized) VIF per term from a correlation matrix.
///
/// For term t with columns `subs`:
///
/// VIF_t = det(R[subs, subs]) * det(R[-subs, -subs]) / det(R)
///
/// A term spanning a single column reduces to the classic 1 / (1 - R²_t).
/// Multi-column terms (dummy-coded factors) give the generalized VIF.
///
/// `assignment[i]` is the 1-based term of column i; the intercept must
/// already be removed. A term with no columns gets VIF 1.
///
/// # Interpretation
/// - VIF = 1: No correlation with other predictors
/// - VIF > 5: Moderate multicollinearity
/// - VIF > 10: High multicollinearity
///
/// Near-singular R gives very large values. Exactly collinear terms get
/// an infinite VIF; terms outside the singular block get NaN, since their
/// ratio is 0/0. Both are returned as is.
pub fn term_vif(correlation: &Mat<f64>, assignment: &[usize], n_terms: usize) -> Vec<f64> {
    let p = correlation.nrows();
    let det_r = determinant(correlation);

    (1..=n_terms)
        .map(|term| {
            let subs: Vec<usize> = assignment
                .iter()
                .enumerate()
                .filter(|&(_, &t)| t == term)
                .map(|(i, _)| i)
                .collect();
            let rest = complement_indices(p, &subs);

            determinant(&principal_submatrix(correlation, &subs))
                * determinant(&principal_submatrix(correlation, &rest))
                / det_r
        })
        .collect()
}

/// Compute the VIF table for one sub-model.
///
/// `cov` is the coefficient covariance, `assignment` maps each of its
/// columns to a term (0 for the intercept, which may only sit in column 0),
/// and `terms` names terms 1..=terms.len() in order.
///
/// A missing intercept or fewer than two terms are reported as diagnostics
/// on the returned report, not as errors.
pub fn compute_collinearity(
    cov: &Mat<f64>,
    assignment: &[usize],
    terms: &[String],
    part: ModelPart,
) -> Result<CollinearityReport, CollinearityError> {
    if cov.nrows() != cov.ncols() {
        return Err(CollinearityError::NonSquareCovariance {
            rows: cov.nrows(),
            cols: cov.ncols(),
        });
    }
    if assignment.len() != cov.nrows() {
        return Err(CollinearityError::term_mapping(
            part,
            format!(
                "{} term assignments for {} covariance columns",
                assignment.len(),
                cov.nrows()
            ),
        ));
    }

    let mut report = CollinearityReport::default();

    let (cov, assignment) = if assignment.first() == Some(&0) {
        (drop_row_col(cov, 0), &assignment[1..])
    } else {
        let diagnostic = Diagnostic::NoIntercept { component: part };
        log::warn!("{part} component: {diagnostic}");
        report.diagnostics.push(diagnostic);
        (cov.clone(), assignment)
    };

    let n_terms = terms.len();
    if n_terms < 2 {
        let diagnostic = Diagnostic::InsufficientTerms {
            component: part,
            n_terms,
        };
        log::warn!("{part} component: {diagnostic}");
        report.diagnostics.push(diagnostic);
        return Ok(report);
    }

    if let Some(&bad) = assignment.iter().find(|&&t| t == 0 || t > n_terms) {
        return Err(CollinearityError::term_mapping(
            part,
            format!("term index {bad} outside 1..={n_terms}"),
        ));
    }

    let correlation = covariance_to_correlation(&cov);
    let vif = term_vif(&correlation, assignment, n_terms);

    report.rows = terms
        .iter()
        .zip(vif)
        .map(|(term, v)| CollinearityRow::new(term.as_str(), v))
        .collect();

    Ok(report)
}

/// Identify terms with high multicollinearity.
///
/// Returns indices of entries with VIF > threshold (or non-finite).
/// Common threshold: 5 or 10.
pub fn high_vif_terms(vif: &[f64], threshold: f64) -> Vec<usize> {
    vif.iter()
        .enumerate()
        .filter(|(_, &v)| !v.is_finite() || v > threshold)
        .map(|(i, _)| i)
        .collect()
}
