//! brewform - render Homebrew formulas from release metadata.
//!
//! A formula template holds `{{name}}` placeholders; callers supply the
//! values and get back the substituted Ruby source, or an
//! [`Error::MissingValue`] naming every placeholder left without a value.
//!
//! Typical use from a release build script:
//!
//! ```no_run
//! use brewform::{BuildProfile, FormulaConfig, FormulaGenerator, FormulaValues};
//!
//! fn main() -> brewform::Result<()> {
//!     if BuildProfile::current()?.is_release() {
//!         let values = FormulaValues::from_cargo_env().shasum("abc123");
//!         FormulaGenerator::default().generate(&FormulaConfig::default(), &values)?;
//!     }
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod output;
pub mod templates;

pub use crate::{
    core::{BuildProfile, Error, FormulaConfig, Result},
    generation::{
        Artifact, FormulaGenerator, FormulaValues, OutputService, TemplateRenderer,
        TeraTemplateRenderer, ValueSet,
    },
    output::FileSystemOutputService,
    templates::{ReleaseChannel, Template},
};

/// Render `template` with `values` using the default tera renderer
pub fn render(template: &Template, values: &ValueSet) -> Result<String> {
    TeraTemplateRenderer::new().render(template, values)
}
