//! Formula generation - coordinates template selection, rendering and output

use std::sync::Arc;
use tracing::info;

use crate::core::config::FormulaConfig;
use crate::core::error::{Error, Result};
use crate::generation::{
    Artifact, FormulaValues, OutputService, TemplateRenderer, TeraTemplateRenderer,
};
use crate::output::FileSystemOutputService;

/// Renders formulas and writes them as `<bin>.rb`
pub struct FormulaGenerator {
    renderer: Arc<dyn TemplateRenderer>,
    output: Arc<dyn OutputService>,
}

impl FormulaGenerator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>, output: Arc<dyn OutputService>) -> Self {
        Self { renderer, output }
    }

    /// Render the formula described by `config`, with `values` layered under
    /// the config's own values. Nothing is written.
    pub fn render(&self, config: &FormulaConfig, values: &FormulaValues) -> Result<Artifact> {
        // Config values win over caller values
        let values = values.clone().merge(config.values.clone());
        let template = config.template()?;

        let content = self.renderer.render(&template, &values.to_value_set())?;
        let file_name = formula_file_name(&values)?;

        Ok(Artifact::new(config.output_dir.join(file_name), content))
    }

    /// Render and write the formula
    pub fn generate(&self, config: &FormulaConfig, values: &FormulaValues) -> Result<Artifact> {
        info!(channel = %config.channel, "Generating formula");

        let artifact = self.render(config, values)?;
        self.output.ensure_directory(&config.output_dir)?;
        self.output.write_artifacts(std::slice::from_ref(&artifact))?;

        info!(path = %artifact.path.display(), "Wrote formula");
        Ok(artifact)
    }
}

/// `<bin>.rb`, refusing binary names that would leave the output directory
fn formula_file_name(values: &FormulaValues) -> Result<String> {
    let bin = values
        .bin
        .as_deref()
        .ok_or_else(|| Error::missing_values(["bin"]))?;

    if bin.is_empty() || bin.contains(['/', '\\']) || bin.contains("..") {
        return Err(Error::config(format!(
            "Invalid binary name for a formula file: {bin:?}"
        )));
    }

    Ok(format!("{bin}.rb"))
}

impl Default for FormulaGenerator {
    fn default() -> Self {
        Self::new(
            Arc::new(TeraTemplateRenderer::new()),
            Arc::new(FileSystemOutputService::new()),
        )
    }
}
