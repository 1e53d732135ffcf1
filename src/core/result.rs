//! Collinearity result structures.

use super::component::ModelPart;
use std::fmt;

/// Severity of the collinearity a VIF indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollinearityLevel {
    Low,
    Moderate,
    High,
}

/// One predictor term's inflation factor.
#[derive(Debug, Clone, PartialEq)]
pub struct CollinearityRow {
    /// Predictor term as named in the model formula.
    pub term: String,

    /// Variance inflation factor. Non-finite or very large under near-singularity.
    pub vif: f64,

    /// Standard error inflation factor, `sqrt(vif)`.
    pub se_factor: f64,

    /// Sub-model the row belongs to. Only set when both parts were requested.
    pub component: Option<ModelPart>,
}

impl CollinearityRow {
    pub(crate) fn new(term: impl Into<String>, vif: f64) -> Self {
        Self {
            term: term.into(),
            vif,
            se_factor: vif.sqrt(),
            component: None,
        }
    }

    /// Tolerance, `1 / vif`.
    pub fn tolerance(&self) -> f64 {
        1.0 / self.vif
    }

    /// Classify the VIF against the given moderate/high thresholds.
    pub fn level(&self, moderate_threshold: f64, high_threshold: f64) -> CollinearityLevel {
        if !self.vif.is_finite() || self.vif >= high_threshold {
            CollinearityLevel::High
        } else if self.vif >= moderate_threshold {
            CollinearityLevel::Moderate
        } else {
            CollinearityLevel::Low
        }
    }
}

/// Non-fatal conditions found while computing VIFs.
///
/// These never abort the check. Callers decide whether to log, ignore or
/// escalate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The model has no intercept; VIFs were computed on the full matrix.
    NoIntercept { component: ModelPart },
    /// Fewer than two predictor terms; no VIFs were computed.
    InsufficientTerms {
        component: ModelPart,
        n_terms: usize,
    },
}

impl Diagnostic {
    /// The part the diagnostic was raised for.
    pub fn component(&self) -> ModelPart {
        match *self {
            Diagnostic::NoIntercept { component } => component,
            Diagnostic::InsufficientTerms { component, .. } => component,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoIntercept { .. } => {
                f.write_str("model has no intercept; VIFs may not be reliable.")
            }
            Diagnostic::InsufficientTerms { .. } => {
                f.write_str("not enough model terms to check for multicollinearity")
            }
        }
    }
}

/// Complete result of a collinearity check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollinearityReport {
    /// One row per predictor term, in formula order. Conditional rows come
    /// before zero-inflated rows when both parts were checked.
    pub rows: Vec<CollinearityRow>,

    /// Non-fatal diagnostics raised along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollinearityReport {
    /// Number of result rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no VIF could be computed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by term name. Returns the first match.
    pub fn get(&self, term: &str) -> Option<&CollinearityRow> {
        self.rows.iter().find(|row| row.term == term)
    }

    /// Rows whose VIF exceeds `threshold` (non-finite VIFs included).
    pub fn above(&self, threshold: f64) -> Vec<&CollinearityRow> {
        self.rows
            .iter()
            .filter(|row| !row.vif.is_finite() || row.vif > threshold)
            .collect()
    }

    /// Whether a diagnostic of the given kind was raised.
    pub fn has_no_intercept(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::NoIntercept { .. }))
    }

    /// Whether any part had too few terms to check.
    pub fn has_insufficient_terms(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::InsufficientTerms { .. }))
    }

    /// Tag every row with `part`.
    pub(crate) fn tagged(mut self, part: ModelPart) -> Self {
        for row in &mut self.rows {
            row.component = Some(part);
        }
        self
    }

    /// Append another report's rows and diagnostics after this one's.
    pub(crate) fn extend(&mut self, other: CollinearityReport) {
        self.rows.extend(other.rows);
        self.diagnostics.extend(other.diagnostics);
    }
}
