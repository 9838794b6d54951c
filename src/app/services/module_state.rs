use crate::domain::{ArtifactState, Module};
use crate::ports::ConfigStore;

/// Answers "is this module already configured?" from artifact existence.
pub struct ModuleStateStore<'a, S: ConfigStore + ?Sized> {
    store: &'a S,
    sysconfig_dir: &'a str,
}

impl<'a, S: ConfigStore + ?Sized> ModuleStateStore<'a, S> {
    pub fn new(store: &'a S, sysconfig_dir: &'a str) -> Self {
        Self { store, sysconfig_dir }
    }

    pub fn artifact_path(&self, module: Module) -> String {
        module.artifact_path(self.sysconfig_dir)
    }

    pub fn state(&self, module: Module) -> ArtifactState {
        if self.store.file_exists(&self.artifact_path(module)) {
            ArtifactState::Present
        } else {
            ArtifactState::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn state_follows_artifact_existence() {
        let store = MemoryStore::new().with_file("config/sysconfig/mnemosyne.env", "X=1\n");
        let states = ModuleStateStore::new(&store, "config/sysconfig");

        assert_eq!(states.state(Module::Mnemosyne), ArtifactState::Present);
        assert_eq!(states.state(Module::ChnServer), ArtifactState::Absent);
        assert_eq!(states.artifact_path(Module::HpfeedsCif), "config/sysconfig/hpfeeds-cif.env");
    }
}
