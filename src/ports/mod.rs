mod asset_source;
mod config_store;
mod console;
mod host_resolver;

pub use asset_source::AssetSource;
pub use config_store::ConfigStore;
pub use console::{Console, NoticeLevel};
pub use host_resolver::HostResolver;
