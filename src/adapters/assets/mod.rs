//! Template and compose fragment sources.

mod directory_assets;
mod embedded_assets;

pub use directory_assets::DirectoryAssets;
pub use embedded_assets::EmbeddedAssets;
