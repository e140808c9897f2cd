//! Tera-based template renderer implementation

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::{TemplateRenderer, ValueSet};
use crate::templates::{Segment, Template};

// Anything tera would accept as the end of a raw block
static RAW_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%-?\s*endraw\s*-?%\}").expect("endraw regex is valid")
});

/// Tera-based template renderer.
///
/// Only `{{name}}` placeholders are substituted. Literal text, including
/// anything tera would read as its own syntax, is emitted as raw blocks and
/// comes back unchanged. Placeholder names are bound to generated variables,
/// so names tera treats specially (`true`, `__tera_context`) are plain
/// placeholders here. Autoescaping is disabled and values are never
/// expanded a second time.
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    fn check_complete(template: &Template, values: &ValueSet) -> Result<()> {
        let missing: Vec<&str> = template
            .placeholders()
            .into_iter()
            .filter(|name| !values.contains(name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            debug!(template = %template.name(), missing = ?missing, "Template has unresolved placeholders");
            Err(Error::missing_values(missing))
        }
    }

    /// Translate a template into tera source plus the context it renders with
    fn compile(template: &Template, values: &ValueSet) -> Result<(String, Context)> {
        let mut source = String::with_capacity(template.source().len() + 64);
        let mut variables: BTreeMap<&str, String> = BTreeMap::new();
        let mut context = Context::new();

        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => push_literal(&mut source, text),
                Segment::Placeholder(name) => {
                    let next = variables.len();
                    let variable = variables
                        .entry(name)
                        .or_insert_with(|| format!("placeholder_{next}"));

                    let value = values
                        .get(name)
                        .ok_or_else(|| Error::missing_values([name]))?;
                    context.insert(variable.as_str(), value);

                    source.push_str("{{ ");
                    source.push_str(variable);
                    source.push_str(" }}");
                }
            }
        }

        Ok((source, context))
    }
}

/// Append literal text so tera outputs it verbatim
fn push_literal(source: &mut String, text: &str) {
    let mut last = 0;

    for marker in RAW_END.find_iter(text) {
        push_raw(source, &text[last..marker.start()]);
        // An endraw marker cannot live inside a raw block, emit it as a string literal
        source.push_str("{{ \"");
        source.push_str(marker.as_str());
        source.push_str("\" }}");
        last = marker.end();
    }

    push_raw(source, &text[last..]);
}

fn push_raw(source: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    source.push_str("{% raw %}");
    source.push_str(text);
    source.push_str("{% endraw %}");
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(&self, template: &Template, values: &ValueSet) -> Result<String> {
        // Fail before touching tera so every missing name is reported at once
        Self::check_complete(template, values)?;

        let (source, context) = Self::compile(template, values)?;

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(template.name(), &source)?;

        let rendered = tera.render(template.name(), &context)?;

        debug!(
            template = %template.name(),
            placeholders = template.placeholders().len(),
            "Rendered template"
        );
        Ok(rendered)
    }
}
