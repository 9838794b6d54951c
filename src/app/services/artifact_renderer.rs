//! Template rendering with an idempotent-write policy.

use serde::Serialize;

use crate::adapters::MinijinjaTemplateRenderer;
use crate::domain::AppError;
use crate::ports::{AssetSource, ConfigStore};

/// Result of a render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The artifact was written to this path.
    Written(String),
    /// The artifact already existed and `force` was not set.
    Skipped(String),
}

impl RenderOutcome {
    pub fn was_written(&self) -> bool {
        matches!(self, RenderOutcome::Written(_))
    }
}

/// Fills templates and persists them without clobbering existing artifacts.
pub struct ArtifactRenderer<'a, S: ConfigStore + ?Sized, A: AssetSource + ?Sized> {
    store: &'a S,
    assets: &'a A,
    engine: MinijinjaTemplateRenderer,
}

impl<'a, S: ConfigStore + ?Sized, A: AssetSource + ?Sized> ArtifactRenderer<'a, S, A> {
    pub fn new(store: &'a S, assets: &'a A) -> Self {
        Self { store, assets, engine: MinijinjaTemplateRenderer::new() }
    }

    /// Render `template_path` with `values` into `output_path`.
    ///
    /// The template is always rendered, so a mismatch surfaces even when the
    /// write is skipped. The write happens only if `output_path` is absent or
    /// `force` is set.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        template_path: &str,
        output_path: &str,
        values: &T,
        force: bool,
    ) -> Result<RenderOutcome, AppError> {
        let template = self.assets.read_asset(template_path)?;
        let rendered = self.engine.render(&template, values, template_path)?;

        if self.store.file_exists(output_path) && !force {
            tracing::info!(output = output_path, "artifact exists, not overwriting");
            return Ok(RenderOutcome::Skipped(output_path.to_string()));
        }

        self.store.write_file(output_path, &rendered)?;
        tracing::info!(template = template_path, output = output_path, force, "artifact written");
        Ok(RenderOutcome::Written(output_path.to_string()))
    }
}
