//! Error handling for the brewform formula library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use brewform::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::missing_values(["shasum"]))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for brewform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for brewform operations
#[derive(Debug, Error)]
pub enum Error {
    /// One or more placeholders referenced by a template have no value
    #[error("missing value for placeholder(s): {}", names.join(", "))]
    MissingValue {
        /// Sorted, de-duplicated placeholder names
        names: Vec<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure writing a rendered formula
    #[error("Output error: {0}")]
    Output(String),
}

impl Error {
    /// Create a missing value error; names are sorted and de-duplicated
    pub fn missing_values<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self::MissingValue { names }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(msg: S) -> Self {
        Self::Output(msg.into())
    }

    /// Placeholder names reported by a [`Error::MissingValue`], empty otherwise
    pub fn missing_names(&self) -> &[String] {
        match self {
            Self::MissingValue { names } => names,
            _ => &[],
        }
    }
}
