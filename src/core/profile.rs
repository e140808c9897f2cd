//! Cargo build profile detection for build scripts.
//!
//! Formulas are usually only regenerated for release builds. Cargo does not
//! expose the profile directly to build scripts, so it is read back from the
//! `target/<profile>` segment of `OUT_DIR`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::{Error, Result};

static PROFILE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"target[/\\](?:[^/\\]+[/\\])?(release|debug|test)(?:[/\\]|$)")
        .expect("profile regex is valid")
});

/// The Cargo profile a build is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildProfile {
    Debug,
    Release,
    Test,
}

impl BuildProfile {
    /// Extract the profile from a build script `OUT_DIR` path
    pub fn from_out_dir(out_dir: impl AsRef<Path>) -> Result<Self> {
        let out_dir = out_dir.as_ref().to_string_lossy();
        let captures = PROFILE_SEGMENT.captures(&out_dir).ok_or_else(|| {
            Error::config(format!("cannot extract build profile from {out_dir}"))
        })?;

        captures[1].parse()
    }

    /// Read the profile of the running build script from `OUT_DIR`
    pub fn current() -> Result<Self> {
        let out_dir = std::env::var("OUT_DIR")
            .map_err(|e| Error::config(format!("OUT_DIR is not available: {e}")))?;
        Self::from_out_dir(out_dir)
    }

    pub fn is_release(&self) -> bool {
        matches!(self, BuildProfile::Release)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
            BuildProfile::Test => "test",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(BuildProfile::Debug),
            "release" => Ok(BuildProfile::Release),
            "test" => Ok(BuildProfile::Test),
            _ => Err(Error::config(format!("unable to convert profile: \"{s}\""))),
        }
    }
}
