use crate::domain::WizardConfig;
use crate::ports::{AssetSource, ConfigStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigStore, A: AssetSource> {
    store: S,
    assets: A,
    config: WizardConfig,
}

impl<S: ConfigStore, A: AssetSource> AppContext<S, A> {
    /// Create a new application context.
    pub fn new(store: S, assets: A, config: WizardConfig) -> Self {
        Self { store, assets, config }
    }

    /// Artifact and manifest storage.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Templates and compose fragments.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn sysconfig_dir(&self) -> &str {
        &self.config.paths.sysconfig_dir
    }

    pub fn manifest_path(&self) -> &str {
        &self.config.paths.manifest
    }
}
