//! Report module states without prompting.

use crate::app::AppContext;
use crate::app::services::ModuleStateStore;
use crate::domain::{ArtifactState, Module};
use crate::ports::{AssetSource, ConfigStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatus {
    pub module: Module,
    pub state: ArtifactState,
    pub artifact_path: String,
}

pub fn execute<S: ConfigStore, A: AssetSource>(ctx: &AppContext<S, A>) -> Vec<ModuleStatus> {
    let states = ModuleStateStore::new(ctx.store(), ctx.sysconfig_dir());
    Module::ALL
        .into_iter()
        .map(|module| ModuleStatus {
            module,
            state: states.state(module),
            artifact_path: states.artifact_path(module),
        })
        .collect()
}
