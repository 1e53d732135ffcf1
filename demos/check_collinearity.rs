//! Example: collinearity check on a zero-inflated count model.
//!
//! The model here is a hand-written stand-in exposing the covariance
//! matrices a hurdle/zero-inflated fit would report. Its zero part has no
//! native term assignment, so the mapping is rebuilt from the raw data.

use collinearity::prelude::*;
use faer::Mat;

struct ZeroInflatedFit {
    data: DataTable,
    count_vcov: Mat<f64>,
    zero_vcov: Mat<f64>,
}

impl ZeroInflatedFit {
    fn new() -> Self {
        let n = 12;
        let season = ["winter", "spring", "summer", "autumn"];
        let labels: Vec<&str> = (0..n).map(|i| season[i % 4]).collect();

        let temp: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let rain: Vec<f64> = (0..n).map(|i| (i % 5) as f64).collect();
        let humidity: Vec<f64> = temp.iter().map(|t| t * 0.9).collect();

        let data = DataTable::new()
            .with_column("temp", DataColumn::Numeric(temp))
            .with_column("rain", DataColumn::Numeric(rain))
            .with_column("humidity", DataColumn::Numeric(humidity))
            .with_column(
                "season",
                DataColumn::Categorical(Factor::from_labels(&labels)),
            );

        // Count part: (Intercept), temp, rain, humidity; temp and humidity nearly collinear
        let count_vcov = Mat::from_fn(4, 4, |i, j| match (i.min(j), i.max(j)) {
            (a, b) if a == b => 1.0,
            (1, 3) => 0.97,
            (0, _) => 0.2,
            _ => 0.1,
        });

        // Zero part: (Intercept), temp, seasonspring, seasonsummer, seasonautumn
        let zero_vcov = Mat::from_fn(5, 5, |i, j| match (i.min(j), i.max(j)) {
            (a, b) if a == b => 1.0,
            (0, _) => 0.3,
            (1, _) => 0.15,
            _ => 0.4,
        });

        Self {
            data,
            count_vcov,
            zero_vcov,
        }
    }
}

impl ModelInspector for ZeroInflatedFit {
    fn family(&self) -> ModelFamily {
        ModelFamily::TwoPartCount
    }

    fn has_intercept(&self) -> bool {
        true
    }

    fn predictors(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        let names: &[&str] = match part {
            ModelPart::Conditional => &["temp", "rain", "humidity"],
            ModelPart::ZeroInflated => &["temp", "season"],
        };
        Ok(names.iter().map(|s| s.to_string()).collect())
    }

    fn coefficient_covariance(&self, block: ParameterBlock) -> Result<Vcov, InspectionError> {
        match block {
            ParameterBlock::Count => Ok(Vcov::Full(self.count_vcov.clone())),
            ParameterBlock::Zero => Ok(Vcov::Full(self.zero_vcov.clone())),
            other => Err(InspectionError::unavailable(format!("{other} covariance"))),
        }
    }

    fn design_assignment(
        &self,
        block: ParameterBlock,
    ) -> Result<Option<Vec<usize>>, InspectionError> {
        match block {
            ParameterBlock::Count => Ok(Some(vec![0, 1, 2, 3])),
            _ => Ok(None),
        }
    }

    fn raw_data(&self) -> Result<&DataTable, InspectionError> {
        Ok(&self.data)
    }

    fn cleaned_parameter_names(&self, part: ModelPart) -> Result<Vec<String>, InspectionError> {
        let names: &[&str] = match part {
            ModelPart::Conditional => &["(Intercept)", "temp", "rain", "humidity"],
            ModelPart::ZeroInflated => &[
                "(Intercept)",
                "temp",
                "seasonspring",
                "seasonsummer",
                "seasonautumn",
            ],
        };
        Ok(names.iter().map(|s| s.to_string()).collect())
    }
}

fn main() -> Result<(), CollinearityError> {
    let model = ZeroInflatedFit::new();

    let checker = CollinearityChecker::builder()
        .component(Component::All)
        .build()?;
    let report = checker.check(&model)?;

    println!(
        "{:<10} {:>14} {:>8} {:>10}  level",
        "term", "component", "VIF", "SE factor"
    );
    for row in &report.rows {
        let component = row.component.map(ModelPart::label).unwrap_or("-");
        println!(
            "{:<10} {:>14} {:>8.2} {:>10.2}  {:?}",
            row.term,
            component,
            row.vif,
            row.se_factor,
            checker.level(row)
        );
    }

    for diagnostic in &report.diagnostics {
        println!("warning ({}): {diagnostic}", diagnostic.component());
    }

    Ok(())
}
