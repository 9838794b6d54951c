use std::fmt;

/// A configurable unit of the deployment, in the fixed order the wizard
/// visits them and the manifest lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    /// The CHN server itself. Always configured.
    ChnServer,
    /// Honeypot data retention (mnemosyne).
    Mnemosyne,
    /// Outbound feed: hpfeeds events pushed to a CIF instance.
    HpfeedsCif,
    /// Inbound feed: CIF indicators pulled into hpfeeds.
    CifHpfeeds,
}

impl Module {
    /// Declaration order. Manifest fragments are appended in this order.
    pub const ALL: [Module; 4] =
        [Module::ChnServer, Module::Mnemosyne, Module::HpfeedsCif, Module::CifHpfeeds];

    pub fn name(&self) -> &'static str {
        match self {
            Module::ChnServer => "chnserver",
            Module::Mnemosyne => "mnemosyne",
            Module::HpfeedsCif => "hpfeeds-cif",
            Module::CifHpfeeds => "cif-hpfeeds",
        }
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, Module::ChnServer)
    }

    /// Human readable summary used in prompts and status output.
    pub fn description(&self) -> &'static str {
        match self {
            Module::ChnServer => "CHN server",
            Module::Mnemosyne => "honeypot data retention policy",
            Module::HpfeedsCif => "outbound feed of honeypot events to CIF",
            Module::CifHpfeeds => "inbound feed of CIF indicators into hpfeeds",
        }
    }

    /// Question asked when the module has no artifact yet.
    pub fn enable_prompt(&self) -> String {
        format!("Would you like to enable the {} ({})?", self.description(), self.name())
    }

    /// Question asked when the module already has an artifact.
    pub fn reconfigure_prompt(&self) -> String {
        format!(
            "The {} ({}) is already configured. Would you like to reconfigure it?",
            self.description(),
            self.name()
        )
    }

    /// Asset path of the env template.
    pub fn template_path(&self) -> String {
        format!("templates/{}.env.tmpl", self.name())
    }

    /// Asset path of the compose fragment.
    pub fn fragment_path(&self) -> String {
        format!("compose/{}.yml", self.name())
    }

    /// Artifact path under the sysconfig directory.
    pub fn artifact_path(&self, sysconfig_dir: &str) -> String {
        let dir = sysconfig_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}.env", self.name())
        } else {
            format!("{}/{}.env", dir, self.name())
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a module's artifact exists on disk before the run touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactState {
    Absent,
    Present,
}

/// Where a module ended up after the wizard visited it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// No artifact and not enabled. Contributes nothing to the manifest.
    Absent,
    /// Artifact existed and was left alone.
    PresentUnchanged,
    /// Artifact was written during this run, either first-time or reconfigured.
    PresentReconfigured,
}

impl ModuleState {
    /// Active modules contribute their fragment to the manifest.
    pub fn is_active(&self) -> bool {
        !matches!(self, ModuleState::Absent)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleState::Absent => "not enabled",
            ModuleState::PresentUnchanged => "unchanged",
            ModuleState::PresentReconfigured => "configured",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_server_is_mandatory() {
        let mandatory: Vec<Module> = Module::ALL.into_iter().filter(Module::is_mandatory).collect();
        assert_eq!(mandatory, vec![Module::ChnServer]);
        assert_eq!(Module::ALL[0], Module::ChnServer);
    }

    #[test]
    fn paths_follow_module_name() {
        assert_eq!(Module::Mnemosyne.template_path(), "templates/mnemosyne.env.tmpl");
        assert_eq!(Module::HpfeedsCif.fragment_path(), "compose/hpfeeds-cif.yml");
        assert_eq!(
            Module::CifHpfeeds.artifact_path("config/sysconfig/"),
            "config/sysconfig/cif-hpfeeds.env"
        );
        assert_eq!(Module::ChnServer.artifact_path(""), "chnserver.env");
    }

    #[test]
    fn only_absent_is_inactive() {
        assert!(!ModuleState::Absent.is_active());
        assert!(ModuleState::PresentUnchanged.is_active());
        assert!(ModuleState::PresentReconfigured.is_active());
    }
}
