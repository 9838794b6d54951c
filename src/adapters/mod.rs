pub mod assets;
pub mod filesystem;
pub mod memory_store;
pub mod system_resolver;
pub mod template;
pub mod terminal_console;

pub use assets::{DirectoryAssets, EmbeddedAssets};
pub use filesystem::FilesystemStore;
pub use memory_store::MemoryStore;
pub use system_resolver::SystemResolver;
pub use template::MinijinjaTemplateRenderer;
pub use terminal_console::TerminalConsole;
