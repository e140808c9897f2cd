//! Render values - the data substituted into formula templates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::utils::to_proper_case;

/// Well-known placeholder names used by the built-in formula templates
pub mod names {
    pub const DESCRIPTION: &str = "description";
    pub const HOMEPAGE: &str = "homepage";
    pub const REPO: &str = "repo";
    pub const BIN: &str = "bin";
    pub const SHASUM: &str = "shasum";
    pub const VERSION: &str = "version";
    pub const CLASS_NAME: &str = "class_name";
}

/// Mapping from placeholder name to replacement value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet {
    values: BTreeMap<String, String>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`ValueSet::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ValueSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Typed view of the values a Homebrew formula needs.
///
/// Every field is optional so partial sets can be layered (config file,
/// Cargo environment, explicit overrides); completeness is only checked when
/// the formula is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaValues {
    #[serde(alias = "desc")]
    pub description: Option<String>,
    /// Falls back to `repo` when unset
    pub homepage: Option<String>,
    pub repo: Option<String>,
    pub bin: Option<String>,
    #[serde(alias = "sha256")]
    pub shasum: Option<String>,
    pub version: Option<String>,
    /// Falls back to `bin` in PascalCase when unset
    pub class_name: Option<String>,
}

impl FormulaValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect package metadata from the Cargo environment of a build script.
    ///
    /// `shasum` is never available here and must be supplied separately.
    pub fn from_cargo_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            description: var("CARGO_PKG_DESCRIPTION"),
            homepage: var("CARGO_PKG_HOMEPAGE"),
            repo: var("CARGO_PKG_REPOSITORY"),
            bin: var("CARGO_PKG_NAME"),
            shasum: None,
            version: var("CARGO_PKG_VERSION"),
            class_name: None,
        }
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn homepage(mut self, value: impl Into<String>) -> Self {
        self.homepage = Some(value.into());
        self
    }

    pub fn repo(mut self, value: impl Into<String>) -> Self {
        self.repo = Some(value.into());
        self
    }

    pub fn bin(mut self, value: impl Into<String>) -> Self {
        self.bin = Some(value.into());
        self
    }

    pub fn shasum(mut self, value: impl Into<String>) -> Self {
        self.shasum = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn class_name(mut self, value: impl Into<String>) -> Self {
        self.class_name = Some(value.into());
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: FormulaValues) -> Self {
        Self {
            description: other.description.or(self.description),
            homepage: other.homepage.or(self.homepage),
            repo: other.repo.or(self.repo),
            bin: other.bin.or(self.bin),
            shasum: other.shasum.or(self.shasum),
            version: other.version.or(self.version),
            class_name: other.class_name.or(self.class_name),
        }
    }

    /// Flatten into a [`ValueSet`], applying the homepage and class name
    /// fallbacks. Unset fields are left out.
    pub fn to_value_set(&self) -> ValueSet {
        let mut set = ValueSet::new();
        let mut put = |name: &str, value: Option<&String>| {
            if let Some(value) = value {
                set.insert(name, value.as_str());
            }
        };

        put(names::DESCRIPTION, self.description.as_ref());
        put(names::HOMEPAGE, self.homepage.as_ref().or(self.repo.as_ref()));
        put(names::REPO, self.repo.as_ref());
        put(names::BIN, self.bin.as_ref());
        put(names::SHASUM, self.shasum.as_ref());
        put(names::VERSION, self.version.as_ref());

        let class_name = self
            .class_name
            .clone()
            .or_else(|| self.bin.as_deref().map(to_proper_case));
        put(names::CLASS_NAME, class_name.as_ref());

        set
    }
}

impl From<&FormulaValues> for ValueSet {
    fn from(values: &FormulaValues) -> Self {
        values.to_value_set()
    }
}

impl From<FormulaValues> for ValueSet {
    fn from(values: FormulaValues) -> Self {
        values.to_value_set()
    }
}
