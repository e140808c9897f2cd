//! Formula template type and placeholder discovery

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::core::error::{Error, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex is valid")
});

/// A piece of template source, in order of appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged
    Literal(&'a str),
    /// Name of a placeholder to substitute
    Placeholder(&'a str),
}

/// An immutable template: literal text interspersed with `{{name}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    /// Create a template from raw source text
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Load a template from a file; the file name becomes the template name
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::template(format!("Failed to read template {}: {}", path.display(), e))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        debug!(template = %name, path = %path.display(), "Loaded template from file");
        Ok(Self::new(name, source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder names referenced by the template, sorted
    pub fn placeholders(&self) -> BTreeSet<&str> {
        PLACEHOLDER
            .captures_iter(&self.source)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Split the source into literal text and placeholders.
    ///
    /// Concatenating the literals with each placeholder's `{{name}}` marker
    /// reproduces the source; empty literals are omitted.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(&self.source) {
            let (Some(marker), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if marker.start() > last {
                segments.push(Segment::Literal(&self.source[last..marker.start()]));
            }
            segments.push(Segment::Placeholder(name.as_str()));
            last = marker.end();
        }

        if last < self.source.len() {
            segments.push(Segment::Literal(&self.source[last..]));
        }
        segments
    }

    /// Whether the template still contains any placeholder
    pub fn has_placeholders(&self) -> bool {
        PLACEHOLDER.is_match(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_placeholders_are_distinct_and_sorted() {
        let template = Template::new(
            "t",
            "url \"{{repo}}/releases/download/{{version}}/{{bin}}.tar.gz\"\nversion \"{{version}}\"",
        );
        let names: Vec<&str> = template.placeholders().into_iter().collect();
        assert_eq!(names, ["bin", "repo", "version"]);
    }

    #[test]
    fn test_placeholders_tolerate_inner_whitespace() {
        let template = Template::new("t", "desc \"{{ description }}\"");
        assert!(template.placeholders().contains("description"));
    }

    #[test]
    fn test_ruby_interpolation_is_not_a_placeholder() {
        let template = Template::new("t", "shell_output(\"#{bin}/tpaws --version\")");
        assert!(template.placeholders().is_empty());
        assert!(!template.has_placeholders());
    }

    #[test]
    fn test_segments_split_literals_and_placeholders() {
        let template = Template::new("t", "{{{version}}} {# note #}{{ bin }}");

        assert_eq!(
            template.segments(),
            [
                Segment::Literal("{"),
                Segment::Placeholder("version"),
                Segment::Literal("} {# note #}"),
                Segment::Placeholder("bin"),
            ]
        );
    }

    #[test]
    fn test_segments_of_plain_text() {
        assert_eq!(
            Template::new("t", "{{ 1 + 1 }}").segments(),
            [Segment::Literal("{{ 1 + 1 }}")]
        );
        assert!(Template::new("t", "").segments().is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "sha256 \"{{{{shasum}}}}\"").unwrap();

        let template = Template::from_file(file.path()).unwrap();
        assert_eq!(template.source(), "sha256 \"{{shasum}}\"");
        assert!(template.placeholders().contains("shasum"));
    }

    #[test]
    fn test_from_missing_file() {
        let error = Template::from_file("/definitely/not/here.rb").unwrap_err();
        assert!(matches!(error, Error::Template(_)));
        assert!(error.to_string().contains("/definitely/not/here.rb"));
    }
}
