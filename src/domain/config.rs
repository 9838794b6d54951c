//! Wizard configuration (`quickstart.toml`).

use serde::Deserialize;

use super::AppError;

/// Name of the optional configuration file at the deployment root.
pub const CONFIG_FILE: &str = "quickstart.toml";

pub const DEFAULT_SYSCONFIG_DIR: &str = "config/sysconfig";
pub const DEFAULT_MANIFEST: &str = "docker-compose.yml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding one `<module>.env` artifact per module.
    #[serde(default = "default_sysconfig_dir")]
    pub sysconfig_dir: String,
    /// Composed manifest output.
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Directory overriding the embedded templates and compose fragments.
    #[serde(default)]
    pub assets: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sysconfig_dir: default_sysconfig_dir(),
            manifest: default_manifest(),
            assets: None,
        }
    }
}

fn default_sysconfig_dir() -> String {
    DEFAULT_SYSCONFIG_DIR.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

impl WizardConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.paths.sysconfig_dir.trim().is_empty() {
            return Err(AppError::config_error("paths.sysconfig_dir must not be empty"));
        }
        if self.paths.manifest.trim().is_empty() {
            return Err(AppError::config_error("paths.manifest must not be empty"));
        }
        if self.paths.assets.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
            return Err(AppError::config_error("paths.assets must not be empty when set"));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<WizardConfig, AppError> {
    let config: WizardConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
