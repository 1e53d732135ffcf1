//! Raw predictor data as seen by the term-assignment fallback.

/// A categorical column: ordered level labels and one level code per row.
///
/// The first level is the reference level absorbed by the intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    levels: Vec<String>,
    codes: Vec<usize>,
}

impl Factor {
    /// Build a factor from level labels and per-row codes into `levels`.
    pub fn new(levels: Vec<String>, codes: Vec<usize>) -> Self {
        Self { levels, codes }
    }

    /// Build a factor from raw labels, taking levels in first-seen order.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut levels: Vec<String> = Vec::new();
        let mut codes = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let code = match levels.iter().position(|l| l == label) {
                Some(code) => code,
                None => {
                    levels.push(label.to_string());
                    levels.len() - 1
                }
            };
            codes.push(code);
        }
        Self { levels, codes }
    }

    /// Level labels; the first is the reference level.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Per-row indices into [`Factor::levels`].
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Levels that get their own coefficient column (all but the first).
    pub fn non_reference_levels(&self) -> &[String] {
        self.levels.get(1..).unwrap_or(&[])
    }
}

/// One raw predictor column.
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Numeric(Vec<f64>),
    Categorical(Factor),
}

impl DataColumn {
    pub fn is_categorical(&self) -> bool {
        matches!(self, DataColumn::Categorical(_))
    }

    /// Level labels of a categorical column; empty for numeric columns.
    pub fn levels(&self) -> &[String] {
        match self {
            DataColumn::Categorical(factor) => factor.levels(),
            DataColumn::Numeric(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DataColumn::Numeric(values) => values.len(),
            DataColumn::Categorical(factor) => factor.codes().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named raw predictor columns, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<(String, DataColumn)>,
}

impl DataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column.
    pub fn with_column(mut self, name: impl Into<String>, column: DataColumn) -> Self {
        self.insert(name, column);
        self
    }

    /// Add (or replace) a column in place.
    pub fn insert(&mut self, name: impl Into<String>, column: DataColumn) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    /// Column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
