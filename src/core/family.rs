//! Model family classification.
//!
//! Families differ in how a fitted model exposes its coefficient covariance
//! and its column-to-term assignment, so every extraction step matches on
//! the family exhaustively.
//!
//! | Family | Examples | Parts |
//! |--------|----------|-------|
//! | `Plain` | lm, glm, lmer, gam | conditional |
//! | `TwoPartCount` | hurdle, zeroinfl, zerotrunc | count, zero |
//! | `MixedTwoPart` | mixed-effects two-part (fixed / zi_fixed) | conditional, zero inflated |
//! | `ZeroInflatedMixed` | zero-inflated mixed models with named vcov blocks | conditional, zero inflated |

use std::fmt;

/// The family a fitted model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Single linear predictor.
    Plain,
    /// Two-part count model with "count" and "zero" sub-models.
    TwoPartCount,
    /// Mixed-effects two-part model with "fixed" and "zi_fixed" parts.
    MixedTwoPart,
    /// Zero-inflated mixed model; its zero-inflation part may not expose a
    /// native term assignment.
    ZeroInflatedMixed,
}

impl ModelFamily {
    /// Whether the family carries a zero-inflation sub-model.
    pub fn is_two_part(self) -> bool {
        !matches!(self, ModelFamily::Plain)
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelFamily::Plain => "plain",
            ModelFamily::TwoPartCount => "two-part count",
            ModelFamily::MixedTwoPart => "mixed two-part",
            ModelFamily::ZeroInflatedMixed => "zero-inflated mixed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_families() {
        assert!(!ModelFamily::Plain.is_two_part());
        assert!(ModelFamily::TwoPartCount.is_two_part());
        assert!(ModelFamily::MixedTwoPart.is_two_part());
        assert!(ModelFamily::ZeroInflatedMixed.is_two_part());
    }
}
