//! Core types for collinearity checks.

mod component;
mod family;
mod options;
mod result;

pub use component::{Component, ModelPart, ParseComponentError};
pub use family::ModelFamily;
pub use options::{CollinearityOptions, CollinearityOptionsBuilder, OptionsError};
pub use result::{CollinearityLevel, CollinearityReport, CollinearityRow, Diagnostic};
