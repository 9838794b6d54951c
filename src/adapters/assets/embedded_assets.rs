use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::AssetSource;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Templates and compose fragments compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for EmbeddedAssets {
    fn read_asset(&self, path: &str) -> Result<String, AppError> {
        let file =
            ASSETS_DIR.get_file(path).ok_or_else(|| AppError::AssetNotFound(path.to_string()))?;
        file.contents_utf8()
            .map(str::to_string)
            .ok_or_else(|| AppError::config_error(format!("Asset '{}' is not valid UTF-8", path)))
    }
}
