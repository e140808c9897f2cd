//! Port interfaces for formula generation

use std::path::Path;

use crate::core::error::Result;
use crate::generation::{Artifact, ValueSet};
use crate::templates::Template;

/// Substitutes values into a template
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `values`.
    ///
    /// Fails with [`crate::Error::MissingValue`] naming every placeholder the
    /// template references but `values` lacks; no partial output is produced.
    fn render(&self, template: &Template, values: &ValueSet) -> Result<String>;
}

/// Persists rendered artifacts
pub trait OutputService: Send + Sync {
    /// Write each artifact to its path
    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<()>;

    /// Create a directory and its parents
    fn ensure_directory(&self, path: &Path) -> Result<()>;
}
