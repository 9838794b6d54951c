pub mod artifact_renderer;
pub mod manifest_assembler;
pub mod module_state;

pub use artifact_renderer::{ArtifactRenderer, RenderOutcome};
pub use manifest_assembler::{MANIFEST_SEPARATOR, ManifestAssembler};
pub use module_state::ModuleStateStore;
