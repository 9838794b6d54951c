//! Byte-level composition of the deployment manifest from fragments.

use crate::domain::AppError;
use crate::ports::{AssetSource, ConfigStore};

/// Written after every fragment.
pub const MANIFEST_SEPARATOR: &str = "\n";

/// Concatenates compose fragments into the manifest.
///
/// No merging or validation: the fragment text is copied verbatim.
pub struct ManifestAssembler<'a, S: ConfigStore + ?Sized, A: AssetSource + ?Sized> {
    store: &'a S,
    assets: &'a A,
}

impl<'a, S: ConfigStore + ?Sized, A: AssetSource + ?Sized> ManifestAssembler<'a, S, A> {
    pub fn new(store: &'a S, assets: &'a A) -> Self {
        Self { store, assets }
    }

    /// Copy `fragment_path` into `output_path`, replacing the file when
    /// `truncate` is set and appending otherwise.
    pub fn append(
        &self,
        fragment_path: &str,
        output_path: &str,
        truncate: bool,
    ) -> Result<(), AppError> {
        let fragment = self.assets.read_asset(fragment_path)?;
        let mut content = String::with_capacity(fragment.len() + MANIFEST_SEPARATOR.len());
        content.push_str(&fragment);
        content.push_str(MANIFEST_SEPARATOR);

        if truncate {
            self.store.write_file(output_path, &content)?;
        } else {
            self.store.append_file(output_path, &content)?;
        }
        tracing::debug!(fragment = fragment_path, output = output_path, truncate, "fragment added");
        Ok(())
    }
}
