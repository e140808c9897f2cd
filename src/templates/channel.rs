//! Built-in Homebrew formula templates.
//!
//! Two variants ship with the library. They only differ in how the download
//! URL is built:
//!
//! - [`ReleaseChannel::Latest`] points at `releases/latest/download`, so the
//!   formula always fetches whatever release is newest.
//! - [`ReleaseChannel::Versioned`] pins the URL to the release tagged with
//!   `{{version}}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{Error, Result};
use crate::templates::Template;

const LATEST_SOURCE: &str = include_str!("../../templates/homebrew/latest.rb.tera");
const VERSIONED_SOURCE: &str = include_str!("../../templates/homebrew/versioned.rb.tera");

/// Which download URL shape a built-in formula uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    #[default]
    Latest,
    Versioned,
}

impl ReleaseChannel {
    /// Lowercase channel name, as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseChannel::Latest => "latest",
            ReleaseChannel::Versioned => "versioned",
        }
    }

    /// Get all built-in channels
    pub fn all() -> [ReleaseChannel; 2] {
        [ReleaseChannel::Latest, ReleaseChannel::Versioned]
    }

    /// The embedded formula template for this channel
    pub fn template(&self) -> Template {
        let source = match self {
            ReleaseChannel::Latest => LATEST_SOURCE,
            ReleaseChannel::Versioned => VERSIONED_SOURCE,
        };
        Template::new(format!("homebrew/{}.rb", self.as_str()), source)
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(ReleaseChannel::Latest),
            "versioned" | "pinned" => Ok(ReleaseChannel::Versioned),
            _ => Err(Error::template(format!("Unknown release channel: {s}"))),
        }
    }
}
