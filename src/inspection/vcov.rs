//! Coefficient covariance as handed back by a model inspector.

use faer::Mat;

/// A named sub-block of a split covariance matrix.
#[derive(Debug, Clone)]
pub struct VcovBlock {
    pub name: String,
    pub matrix: Mat<f64>,
}

impl VcovBlock {
    /// Create a block named `name`.
    pub fn new(name: impl Into<String>, matrix: Mat<f64>) -> Self {
        Self {
            name: name.into(),
            matrix,
        }
    }
}

/// Coefficient covariance of a fitted model.
///
/// Models with more than one linear predictor may report their covariance
/// as separate named blocks instead of one matrix.
#[derive(Debug, Clone)]
pub enum Vcov {
    Full(Mat<f64>),
    Blocks(Vec<VcovBlock>),
}

impl Vcov {
    /// Find a block by any of `names` (ASCII case-insensitive).
    pub fn block(&self, names: &[&str]) -> Option<&Mat<f64>> {
        match self {
            Vcov::Full(_) => None,
            Vcov::Blocks(blocks) => blocks
                .iter()
                .find(|b| names.iter().any(|n| b.name.eq_ignore_ascii_case(n)))
                .map(|b| &b.matrix),
        }
    }
}

impl From<Mat<f64>> for Vcov {
    fn from(matrix: Mat<f64>) -> Self {
        Vcov::Full(matrix)
    }
}
