//! Wizard configuration loading from the deployment root.

use crate::domain::config::{self, CONFIG_FILE};
use crate::domain::{AppError, WizardConfig};
use crate::ports::ConfigStore;

/// Load `quickstart.toml`, falling back to defaults when it is absent.
pub fn load_config<S: ConfigStore + ?Sized>(store: &S) -> Result<WizardConfig, AppError> {
    if !store.file_exists(CONFIG_FILE) {
        tracing::debug!("no {} found, using defaults", CONFIG_FILE);
        return Ok(WizardConfig::default());
    }

    let content = store.read_file(CONFIG_FILE)?;
    config::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config(&MemoryStore::new()).unwrap();
        assert_eq!(config, WizardConfig::default());
    }

    #[test]
    fn present_file_is_parsed() {
        let store =
            MemoryStore::new().with_file(CONFIG_FILE, "[paths]\nmanifest = \"chn-compose.yml\"\n");
        let config = load_config(&store).unwrap();
        assert_eq!(config.paths.manifest, "chn-compose.yml");
        assert_eq!(config.paths.sysconfig_dir, "config/sysconfig");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let store = MemoryStore::new().with_file(CONFIG_FILE, "[paths\n");
        assert!(matches!(load_config(&store), Err(AppError::TomlParse(_))));
    }
}
