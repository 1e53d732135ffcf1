//! Collinearity checks for fitted models.

use super::assignment::resolve_term_assignment;
use super::covariance::extract_covariance;
use super::error::CollinearityError;
use super::vif::compute_collinearity;
use crate::core::{
    CollinearityLevel, CollinearityOptions, CollinearityOptionsBuilder, CollinearityReport,
    CollinearityRow, Component, ModelPart,
};
use crate::inspection::ModelInspector;

/// Check the predictors of a fitted model for multicollinearity.
///
/// Returns one row per predictor term of the selected component(s). For
/// [`Component::All`] on a two-part model, conditional rows come first and
/// every row is tagged with its part.
///
/// # Example
///
/// ```rust,ignore
/// use collinearity::prelude::*;
///
/// let report = check_collinearity(&model, Component::All)?;
/// for row in &report.rows {
///     println!("{:<12} VIF = {:.2}", row.term, row.vif);
/// }
/// for diagnostic in &report.diagnostics {
///     eprintln!("warning: {diagnostic}");
/// }
/// ```
pub fn check_collinearity<M: ModelInspector + ?Sized>(
    model: &M,
    component: Component,
) -> Result<CollinearityReport, CollinearityError> {
    let family = model.family();

    if !family.is_two_part() && component.as_part() != Some(ModelPart::Conditional) {
        return Err(CollinearityError::UnsupportedComponent { component, family });
    }

    match component.as_part() {
        Some(part) => check_part(model, part),
        None => {
            let mut report = CollinearityReport::default();
            for part in component.parts() {
                report.extend(check_part(model, part)?.tagged(part));
            }
            Ok(report)
        }
    }
}

/// Run the extraction and VIF computation for one concrete part.
fn check_part<M: ModelInspector + ?Sized>(
    model: &M,
    part: ModelPart,
) -> Result<CollinearityReport, CollinearityError> {
    let cov = extract_covariance(model, part)?;
    let assignment = resolve_term_assignment(model, part, cov.nrows())?;
    let terms = model.predictors(part)?;

    log::debug!(
        "checking {part} component: {} coefficients, {} terms",
        cov.nrows(),
        terms.len()
    );

    compute_collinearity(&cov, &assignment, &terms, part)
}

/// Configurable collinearity checker.
///
/// # Example
///
/// ```rust,ignore
/// use collinearity::prelude::*;
///
/// let checker = CollinearityChecker::builder()
///     .component(Component::ZeroInflated)
///     .high_threshold(8.0)
///     .build()?;
///
/// let report = checker.check(&model)?;
/// let flagged = checker.flagged(&report);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollinearityChecker {
    options: CollinearityOptions,
}

impl CollinearityChecker {
    /// Create a checker with the given options.
    pub fn new(options: CollinearityOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the checker.
    pub fn builder() -> CollinearityCheckerBuilder {
        CollinearityCheckerBuilder::default()
    }

    /// The options this checker runs with.
    pub fn options(&self) -> &CollinearityOptions {
        &self.options
    }

    /// Run the check on `model` for the configured component.
    pub fn check<M: ModelInspector + ?Sized>(
        &self,
        model: &M,
    ) -> Result<CollinearityReport, CollinearityError> {
        self.options.validate()?;
        check_collinearity(model, self.options.component)
    }

    /// Severity of a row under the configured thresholds.
    pub fn level(&self, row: &CollinearityRow) -> CollinearityLevel {
        row.level(self.options.moderate_threshold, self.options.high_threshold)
    }

    /// Rows at moderate or high severity.
    pub fn flagged<'a>(&self, report: &'a CollinearityReport) -> Vec<&'a CollinearityRow> {
        report
            .rows
            .iter()
            .filter(|row| self.level(row) >= CollinearityLevel::Moderate)
            .collect()
    }
}

/// Builder for `CollinearityChecker`.
#[derive(Debug, Clone, Default)]
pub struct CollinearityCheckerBuilder {
    builder: CollinearityOptionsBuilder,
}

impl CollinearityCheckerBuilder {
    /// Set the component to analyze.
    pub fn component(mut self, component: Component) -> Self {
        self.builder = self.builder.component(component);
        self
    }

    /// Set the moderate-collinearity threshold.
    pub fn moderate_threshold(mut self, threshold: f64) -> Self {
        self.builder = self.builder.moderate_threshold(threshold);
        self
    }

    /// Set the high-collinearity threshold.
    pub fn high_threshold(mut self, threshold: f64) -> Self {
        self.builder = self.builder.high_threshold(threshold);
        self
    }

    /// Build the checker, validating its options.
    pub fn build(self) -> Result<CollinearityChecker, CollinearityError> {
        Ok(CollinearityChecker::new(self.builder.build()?))
    }
}
