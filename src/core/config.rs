//! Formula configuration file.
//!
//! A formula can be described in a small YAML or TOML file next to the
//! project, e.g. `formula.toml`:
//!
//! ```toml
//! channel = "versioned"
//! output_dir = "dist"
//!
//! [values]
//! bin = "tpaws"
//! description = "CLI to manage TargetProcess and AWS CodeCommit"
//! repo = "https://github.com/rawnly/tpaws"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::FormulaValues;
use crate::templates::{ReleaseChannel, Template};

/// Describes which template to render, with which values, and where to write it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Built-in template to use when `template_path` is unset
    pub channel: ReleaseChannel,
    /// Custom template file, overrides `channel`
    pub template_path: Option<PathBuf>,
    /// Directory receiving `<bin>.rb`
    pub output_dir: PathBuf,
    /// Values layered over whatever the caller supplies
    pub values: FormulaValues,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            channel: ReleaseChannel::default(),
            template_path: None,
            output_dir: PathBuf::from("."),
            values: FormulaValues::default(),
        }
    }
}

impl FormulaConfig {
    /// Load a config file, choosing the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let config = match extension.as_deref() {
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                return Err(Error::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), channel = %config.channel, "Loaded formula config");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The template this config selects
    pub fn template(&self) -> Result<Template> {
        match &self.template_path {
            Some(path) => Template::from_file(path),
            None => Ok(self.channel.template()),
        }
    }

    /// Resolve relative paths against `base`, typically the config file's directory
    pub fn relative_to(mut self, base: &Path) -> Self {
        self.template_path = self
            .template_path
            .take()
            .map(|path| if path.is_relative() { base.join(path) } else { path });
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormulaConfig::default();
        assert_eq!(config.channel, ReleaseChannel::Latest);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.template_path.is_none());
        assert_eq!(config.values, FormulaValues::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = FormulaConfig::from_toml_str(
            r#"
channel = "versioned"
output_dir = "dist"

[values]
bin = "tpaws"
sha256 = "abc123"
"#,
        )
        .unwrap();

        assert_eq!(config.channel, ReleaseChannel::Versioned);
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.values.bin.as_deref(), Some("tpaws"));
        assert_eq!(config.values.shasum.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_from_yaml_str() {
        let config = FormulaConfig::from_yaml_str(
            "channel: latest\nvalues:\n  description: A CLI tool\n  version: 1.0.0\n",
        )
        .unwrap();

        assert_eq!(config.channel, ReleaseChannel::Latest);
        assert_eq!(config.values.description.as_deref(), Some("A CLI tool"));
        assert_eq!(config.values.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = TempDir::new().unwrap();
        let toml_path = dir.path().join("formula.toml");
        let yaml_path = dir.path().join("formula.yaml");
        std::fs::write(&toml_path, "channel = \"versioned\"\n").unwrap();
        std::fs::write(&yaml_path, "channel: versioned\n").unwrap();

        assert_eq!(
            FormulaConfig::from_file(&toml_path).unwrap().channel,
            ReleaseChannel::Versioned
        );
        assert_eq!(
            FormulaConfig::from_file(&yaml_path).unwrap().channel,
            ReleaseChannel::Versioned
        );
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formula.json");
        std::fs::write(&path, "{}").unwrap();

        let error = FormulaConfig::from_file(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();

        let error = FormulaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let error = FormulaConfig::from_toml_str("channel = ").unwrap_err();
        assert!(matches!(error, Error::Toml(_)));
    }

    #[test]
    fn test_template_prefers_custom_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.rb");
        std::fs::write(&path, "version \"{{version}}\"").unwrap();

        let config = FormulaConfig {
            template_path: Some(path),
            ..Default::default()
        };
        assert_eq!(config.template().unwrap().name(), "custom.rb");

        let builtin = FormulaConfig::default().template().unwrap();
        assert_eq!(builtin.name(), "homebrew/latest.rb");
    }

    #[test]
    fn test_relative_to() {
        let config = FormulaConfig {
            template_path: Some(PathBuf::from("formula.rb.tera")),
            output_dir: PathBuf::from("dist"),
            ..Default::default()
        }
        .relative_to(Path::new("/project"));

        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/project/formula.rb.tera"))
        );
        assert_eq!(config.output_dir, PathBuf::from("/project/dist"));
    }
}
