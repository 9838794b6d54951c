//! One-shot server artifact generator.

use crate::app::services::{ArtifactRenderer, RenderOutcome};
use crate::domain::{AppError, CertificateStrategy, Module, ServerSettings};
use crate::ports::{AssetSource, ConfigStore};

/// Flags of the `sysconfig` command.
#[derive(Debug, Clone)]
pub struct SysconfigOptions {
    pub server_base_url: String,
    pub certificate_strategy: CertificateStrategy,
    pub output_file: String,
    pub force: bool,
}

/// Render the server artifact to `options.output_file` with a fresh superuser password.
///
/// The strategy is written as given; host normalization belongs to the guided flow.
pub fn execute<S, A>(
    store: &S,
    assets: &A,
    options: &SysconfigOptions,
) -> Result<RenderOutcome, AppError>
where
    S: ConfigStore + ?Sized,
    A: AssetSource + ?Sized,
{
    let settings = ServerSettings::new(&options.server_base_url, options.certificate_strategy);
    ArtifactRenderer::new(store, assets).render(
        &Module::ChnServer.template_path(),
        &options.output_file,
        &settings,
        options.force,
    )
}
