//! Collinearity check options and configuration.

use super::component::Component;
use thiserror::Error;

/// Configuration options for a collinearity check.
#[derive(Debug, Clone)]
pub struct CollinearityOptions {
    /// Which sub-model to analyze (default: conditional).
    pub component: Component,
    /// VIF at or above which collinearity is reported as moderate (default: 5).
    pub moderate_threshold: f64,
    /// VIF at or above which collinearity is reported as high (default: 10).
    pub high_threshold: f64,
}

impl Default for CollinearityOptions {
    fn default() -> Self {
        Self {
            component: Component::Conditional,
            moderate_threshold: 5.0,
            high_threshold: 10.0,
        }
    }
}

/// Errors that can occur when validating collinearity options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("moderate_threshold must be at least 1, got {0}")]
    InvalidModerateThreshold(f64),
    #[error("high_threshold ({high}) must not be below moderate_threshold ({moderate})")]
    ThresholdOrder { moderate: f64, high: f64 },
}

impl CollinearityOptions {
    /// Create a new builder for collinearity options.
    pub fn builder() -> CollinearityOptionsBuilder {
        CollinearityOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.moderate_threshold >= 1.0) {
            return Err(OptionsError::InvalidModerateThreshold(
                self.moderate_threshold,
            ));
        }
        if !(self.high_threshold >= self.moderate_threshold) {
            return Err(OptionsError::ThresholdOrder {
                moderate: self.moderate_threshold,
                high: self.high_threshold,
            });
        }
        Ok(())
    }
}

/// Builder for `CollinearityOptions`.
#[derive(Debug, Clone, Default)]
pub struct CollinearityOptionsBuilder {
    options: CollinearityOptions,
}

impl CollinearityOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component to analyze.
    pub fn component(mut self, component: Component) -> Self {
        self.options.component = component;
        self
    }

    /// Set the moderate-collinearity threshold.
    pub fn moderate_threshold(mut self, threshold: f64) -> Self {
        self.options.moderate_threshold = threshold;
        self
    }

    /// Set the high-collinearity threshold.
    pub fn high_threshold(mut self, threshold: f64) -> Self {
        self.options.high_threshold = threshold;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<CollinearityOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = CollinearityOptions::default();
        assert_eq!(opts.component, Component::Conditional);
        assert_eq!(opts.moderate_threshold, 5.0);
        assert_eq!(opts.high_threshold, 10.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = CollinearityOptions::builder()
            .component(Component::All)
            .moderate_threshold(4.0)
            .high_threshold(8.0)
            .build()
            .unwrap();
        assert_eq!(opts.component, Component::All);
        assert_eq!(opts.moderate_threshold, 4.0);
        assert_eq!(opts.high_threshold, 8.0);
    }

    #[test]
    fn test_invalid_thresholds() {
        let result = CollinearityOptions::builder()
            .moderate_threshold(0.5)
            .build();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidModerateThreshold(_))
        ));

        let result = CollinearityOptions::builder()
            .moderate_threshold(10.0)
            .high_threshold(5.0)
            .build();
        assert!(matches!(result, Err(OptionsError::ThresholdOrder { .. })));

        let result = CollinearityOptions::builder()
            .moderate_threshold(f64::NAN)
            .build();
        assert!(result.is_err());
    }
}
