//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{
    DirectoryAssets, EmbeddedAssets, FilesystemStore, SystemResolver, TerminalConsole,
};
use crate::app::commands::{guide, status, sysconfig};
use crate::app::config::load_config;
use crate::app::prompt::PromptLoop;
use crate::app::AppContext;
use crate::ports::{AssetSource, ConfigStore, Console, HostResolver};

pub use crate::app::commands::guide::{ModuleReport, RunSummary};
pub use crate::app::commands::status::ModuleStatus;
pub use crate::app::commands::sysconfig::SysconfigOptions;
pub use crate::app::services::RenderOutcome;
pub use crate::domain::AppError;

type DeploymentContext = AppContext<FilesystemStore, Box<dyn AssetSource>>;

/// Create an `AppContext` for a deployment root, honouring `quickstart.toml`.
fn create_context(root: PathBuf) -> Result<DeploymentContext, AppError> {
    let store = FilesystemStore::new(root);
    let config = load_config(&store)?;
    let assets = select_assets(&store, config.paths.assets.as_deref());
    Ok(AppContext::new(store, assets, config))
}

fn select_assets(store: &FilesystemStore, override_dir: Option<&str>) -> Box<dyn AssetSource> {
    match override_dir {
        Some(dir) => {
            let root = store.resolve_path(dir);
            tracing::info!(assets = %root.display(), "using asset directory override");
            Box::new(DirectoryAssets::new(root))
        }
        None => Box::new(EmbeddedAssets::new()),
    }
}

/// Run the guided configuration in the current directory.
pub fn guide() -> Result<RunSummary, AppError> {
    guide_at(std::env::current_dir()?)
}

/// Run the guided configuration at the specified deployment root on the terminal.
pub fn guide_at(root: impl Into<PathBuf>) -> Result<RunSummary, AppError> {
    let mut console = TerminalConsole::new();
    guide_with(root, &mut console, &SystemResolver::new())
}

/// Run the guided configuration with a caller-supplied console and resolver.
pub fn guide_with(
    root: impl Into<PathBuf>,
    console: &mut dyn Console,
    resolver: &dyn HostResolver,
) -> Result<RunSummary, AppError> {
    let ctx = create_context(root.into())?;
    let mut prompts = PromptLoop::new(console, resolver);
    guide::execute(&ctx, &mut prompts)
}

/// Report module states for the current directory.
pub fn status() -> Result<Vec<ModuleStatus>, AppError> {
    status_at(std::env::current_dir()?)
}

/// Report module states at the specified deployment root.
pub fn status_at(root: impl Into<PathBuf>) -> Result<Vec<ModuleStatus>, AppError> {
    let ctx = create_context(root.into())?;
    Ok(status::execute(&ctx))
}

/// Generate a single server artifact in the current directory.
pub fn sysconfig(options: &SysconfigOptions) -> Result<RenderOutcome, AppError> {
    sysconfig_at(std::env::current_dir()?, options)
}

/// Generate a single server artifact, resolving relative paths against `root`.
///
/// Reads no `quickstart.toml`: the output path comes from the options and the
/// template is always the embedded one.
pub fn sysconfig_at(
    root: impl Into<PathBuf>,
    options: &SysconfigOptions,
) -> Result<RenderOutcome, AppError> {
    let store = FilesystemStore::new(root.into());
    sysconfig::execute(&store, &EmbeddedAssets::new(), options)
}
