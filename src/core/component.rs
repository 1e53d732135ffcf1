//! Component selectors for models with more than one linear predictor.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which linear sub-model a collinearity check is run on.
///
/// Two-part models (hurdle, zero-inflated) carry a count/conditional part and
/// a zero-inflation part. `Count` and `Zi` are aliases kept for callers that
/// use the count-model vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Component {
    /// The conditional (count) model.
    #[default]
    Conditional,
    /// Alias of [`Component::Conditional`].
    Count,
    /// The zero-inflation model.
    ZeroInflated,
    /// Alias of [`Component::ZeroInflated`].
    Zi,
    /// Both parts, conditional first.
    All,
}

impl Component {
    /// Fold aliases onto their canonical selector.
    pub fn normalize(self) -> Self {
        match self {
            Component::Count => Component::Conditional,
            Component::Zi => Component::ZeroInflated,
            other => other,
        }
    }

    /// Concrete parts this selector covers, in output order.
    pub fn parts(self) -> Vec<ModelPart> {
        match self.normalize() {
            Component::All => vec![ModelPart::Conditional, ModelPart::ZeroInflated],
            Component::ZeroInflated => vec![ModelPart::ZeroInflated],
            _ => vec![ModelPart::Conditional],
        }
    }

    /// The single part this selector names, or `None` for [`Component::All`].
    pub fn as_part(self) -> Option<ModelPart> {
        match self.normalize() {
            Component::Conditional => Some(ModelPart::Conditional),
            Component::ZeroInflated => Some(ModelPart::ZeroInflated),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Conditional => "conditional",
            Component::Count => "count",
            Component::ZeroInflated => "zero_inflated",
            Component::Zi => "zi",
            Component::All => "all",
        };
        f.write_str(name)
    }
}

/// Error returned when a component name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component '{0}': expected conditional, count, zero_inflated, zi or all")]
pub struct ParseComponentError(pub String);

impl FromStr for Component {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conditional" | "cond" => Ok(Component::Conditional),
            "count" => Ok(Component::Count),
            "zero_inflated" | "zero-inflated" | "zero inflated" | "zero" => {
                Ok(Component::ZeroInflated)
            }
            "zi" => Ok(Component::Zi),
            "all" => Ok(Component::All),
            _ => Err(ParseComponentError(s.to_string())),
        }
    }
}

/// A concrete linear sub-model. Unlike [`Component`] it can never mean "both".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelPart {
    Conditional,
    ZeroInflated,
}

impl ModelPart {
    /// Label used to tag result rows.
    pub fn label(self) -> &'static str {
        match self {
            ModelPart::Conditional => "conditional",
            ModelPart::ZeroInflated => "zero inflated",
        }
    }

    /// Names a covariance sub-block for this part may be stored under.
    pub(crate) fn block_names(self) -> &'static [&'static str] {
        match self {
            ModelPart::Conditional => &["conditional", "cond"],
            ModelPart::ZeroInflated => &["zero_inflated", "zi"],
        }
    }
}

impl From<ModelPart> for Component {
    fn from(part: ModelPart) -> Self {
        match part {
            ModelPart::Conditional => Component::Conditional,
            ModelPart::ZeroInflated => Component::ZeroInflated,
        }
    }
}

impl fmt::Display for ModelPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
