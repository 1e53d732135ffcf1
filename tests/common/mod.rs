//! Common test utilities: a mock model inspector and data generators.
#![allow(dead_code)]

use collinearity::core::{ModelFamily, ModelPart};
use collinearity::inspection::{
    DataColumn, DataTable, Factor, InspectionError, ModelInspector, ParameterBlock, Vcov, VcovBlock,
};
use faer::Mat;

/// Simple deterministic "random" for reproducibility, uniform in [-1, 1].
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate a numeric column of uniform noise.
pub fn noise_column(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

/// Generate a balanced factor cycling through `levels`.
pub fn cyclic_factor(n: usize, levels: &[&str]) -> DataColumn {
    let labels: Vec<&str> = (0..n).map(|i| levels[i % levels.len()]).collect();
    DataColumn::Categorical(Factor::from_labels(&labels))
}

/// A design matrix with its column names and term assignment.
pub struct Design {
    pub x: Mat<f64>,
    pub names: Vec<String>,
    pub assignment: Vec<usize>,
}

/// Build a treatment-coded design matrix for `predictors`.
pub fn design_matrix(data: &DataTable, predictors: &[&str], intercept: bool) -> Design {
    let mut columns: Vec<Vec<f64>> = Vec::new();
    let mut names = Vec::new();
    let mut assignment = Vec::new();

    let n = predictors
        .first()
        .and_then(|p| data.column(p))
        .map(|c| c.len())
        .unwrap_or(0);

    if intercept {
        columns.push(vec![1.0; n]);
        names.push("(Intercept)".to_string());
        assignment.push(0);
    }

    for (i, &predictor) in predictors.iter().enumerate() {
        match data.column(predictor).expect("predictor in data") {
            DataColumn::Numeric(values) => {
                columns.push(values.clone());
                names.push(predictor.to_string());
                assignment.push(i + 1);
            }
            DataColumn::Categorical(factor) => {
                for (k, level) in factor.levels().iter().enumerate().skip(1) {
                    columns.push(
                        factor
                            .codes()
                            .iter()
                            .map(|&c| if c == k { 1.0 } else { 0.0 })
                            .collect(),
                    );
                    names.push(format!("{predictor}{level}"));
                    assignment.push(i + 1);
                }
            }
        }
    }

    let x = Mat::from_fn(n, columns.len(), |i, j| columns[j][i]);
    Design {
        x,
        names,
        assignment,
    }
}

/// (X'X)^-1 via QR decomposition.
pub fn xtx_inverse(x: &Mat<f64>) -> Mat<f64> {
    let p = x.ncols();
    let xtx = x.transpose() * x;

    let qr = xtx.qr();
    let q = qr.compute_Q();
    let r = qr.R();
    let qt = q.transpose();

    // Solve R * X = Q' column by column
    let mut inv = Mat::zeros(p, p);
    for col in 0..p {
        for i in (0..p).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..p {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }
    inv
}

/// A correlation-style covariance with unit diagonal and the given
/// off-diagonal entries `(i, j, value)`.
pub fn covariance_with(p: usize, entries: &[(usize, usize, f64)]) -> Mat<f64> {
    let mut m = Mat::<f64>::identity(p, p);
    for &(i, j, v) in entries {
        m[(i, j)] = v;
        m[(j, i)] = v;
    }
    m
}

/// One linear sub-model of a mock fitted model.
#[derive(Clone)]
pub struct MockPart {
    pub predictors: Vec<String>,
    pub vcov: Mat<f64>,
    pub assignment: Option<Vec<usize>>,
    pub parameter_names: Vec<String>,
}

impl MockPart {
    /// "Fit" a part: covariance is (X'X)^-1 of the design for `predictors`.
    pub fn fit(data: &DataTable, predictors: &[&str], intercept: bool) -> Self {
        let design = design_matrix(data, predictors, intercept);
        Self {
            predictors: predictors.iter().map(|p| p.to_string()).collect(),
            vcov: xtx_inverse(&design.x),
            assignment: Some(design.assignment),
            parameter_names: design.names,
        }
    }

    /// A part with a given covariance and one column per numeric term.
    pub fn from_covariance(predictors: &[&str], vcov: Mat<f64>, intercept: bool) -> Self {
        let mut assignment = Vec::new();
        let mut parameter_names = Vec::new();
        if intercept {
            assignment.push(0);
            parameter_names.push("(Intercept)".to_string());
        }
        for (i, p) in predictors.iter().enumerate() {
            assignment.push(i + 1);
            parameter_names.push(p.to_string());
        }
        Self {
            predictors: predictors.iter().map(|p| p.to_string()).collect(),
            vcov,
            assignment: Some(assignment),
            parameter_names,
        }
    }

    pub fn without_assignment(mut self) -> Self {
        self.assignment = None;
        self
    }
}

/// Mock fitted model serving canned inspection results.
pub struct MockModel {
    pub family: ModelFamily,
    pub intercept: bool,
    pub conditional: MockPart,
    pub zero_inflated: Option<MockPart>,
    pub data: DataTable,
    /// Make every design-assignment request fail.
    pub failing_assignment: bool,
    /// Drop the zero-inflation block from split covariances.
    pub missing_zi_block: bool,
}

impl MockModel {
    pub fn plain(part: MockPart, data: DataTable, intercept: bool) -> Self {
        Self {
            family: ModelFamily::Plain,
            intercept,
            conditional: part,
            zero_inflated: None,
            data,
            failing_assignment: false,
            missing_zi_block: false,
        }
    }

    pub fn two_part(
        family: ModelFamily,
        conditional: MockPart,
        zero_inflated: MockPart,
        data: DataTable,
    ) -> Self {
        Self {
            family,
            intercept: true,
            conditional,
            zero_inflated: Some(zero_inflated),
            data,
            failing_assignment: false,
            missing_zi_block: false,
        }
    }

    fn part(&self, part: ModelPart) -> Result<&MockPart, InspectionError> {
        match part {
            ModelPart::Conditional => Ok(&self.conditional),
            ModelPart::ZeroInflated => self
                .zero_inflated
                .as_ref()
                .ok_or_else(|| InspectionError::unavailable("zero-inflation part")),
        }
    }

    fn block_part(&self, block: ParameterBlock) -> Result<ModelPart, InspectionError> {
        use ParameterBlock::*;
        match (self.family, block) {
            (ModelFamily::Plain, Model) | (ModelFamily::ZeroInflatedMixed, Model) => {
                Ok(ModelPart::Conditional)
            }
            (ModelFamily::TwoPartCount, Count) | (ModelFamily::MixedTwoPart, FixedEffects) => {
                Ok(ModelPart::Conditional)
            }
            (ModelFamily::TwoPartCount, Zero)
            | (ModelFamily::MixedTwoPart, ZeroInflationFixedEffects)
            | (ModelFamily::ZeroInflatedMixed, ZeroInflation) => Ok(ModelPart::ZeroInflated),
            (family, block) => Err(InspectionError::Other(format!(
                "block {block} does not exist on {family} models"
            ))),
        }
    }
}

impl ModelInspector for MockModel {
    fn family(&self) -> ModelFamily {
        self.family
    }

    fn has_intercept(&self) -> bool {
        self.intercept
    }

    fn predictors(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        Ok(self.part(part)?.predictors.clone())
    }

    fn coefficient_covariance(&self, block: ParameterBlock) -> Result<Vcov, InspectionError> {
        if self.family == ModelFamily::ZeroInflatedMixed && block == ParameterBlock::Model {
            let mut blocks = vec![VcovBlock::new("cond", self.conditional.vcov.clone())];
            if let (Some(zi), false) = (&self.zero_inflated, self.missing_zi_block) {
                blocks.push(VcovBlock::new("zi", zi.vcov.clone()));
            }
            return Ok(Vcov::Blocks(blocks));
        }
        let part = self.block_part(block)?;
        Ok(Vcov::Full(self.part(part)?.vcov.clone()))
    }

    fn design_assignment(
        &self,
        block: ParameterBlock,
    ) -> Result<Option<Vec<usize>>, InspectionError> {
        if self.failing_assignment {
            return Err(InspectionError::Other(
                "model matrix unavailable".to_string(),
            ));
        }
        let part = self.block_part(block)?;
        Ok(self.part(part)?.assignment.clone())
    }

    fn raw_data(&self) -> Result<&DataTable, InspectionError> {
        Ok(&self.data)
    }

    fn cleaned_parameter_names(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        Ok(self.part(part)?.parameter_names.clone())
    }
}

/// Four numeric predictors; x1 and x2 correlate at about 0.98.
pub fn scenario_a_data(n: usize) -> DataTable {
    let x1 = noise_column(n, 11);
    let e = noise_column(n, 23);
    let x2: Vec<f64> = x1.iter().zip(&e).map(|(a, b)| a + 0.2 * b).collect();
    DataTable::new()
        .with_column("x1", DataColumn::Numeric(x1))
        .with_column("x2", DataColumn::Numeric(x2))
        .with_column("x3", DataColumn::Numeric(noise_column(n, 37)))
        .with_column("x4", DataColumn::Numeric(noise_column(n, 53)))
}

/// A three-level factor and an unrelated numeric predictor.
pub fn scenario_b_data(n: usize) -> DataTable {
    DataTable::new()
        .with_column("group", cyclic_factor(n, &["a", "b", "c"]))
        .with_column("dose", DataColumn::Numeric(noise_column(n, 71)))
}

/// Count and zero parts with three numeric predictors each.
pub fn two_part_data(n: usize) -> DataTable {
    DataTable::new()
        .with_column("x1", DataColumn::Numeric(noise_column(n, 101)))
        .with_column("x2", DataColumn::Numeric(noise_column(n, 103)))
        .with_column("x3", DataColumn::Numeric(noise_column(n, 107)))
        .with_column("z1", DataColumn::Numeric(noise_column(n, 109)))
        .with_column("z2", DataColumn::Numeric(noise_column(n, 113)))
        .with_column("g", cyclic_factor(n, &["lo", "mid", "hi"]))
}
