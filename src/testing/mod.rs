mod scripted_console;
mod static_resolver;

pub use scripted_console::ScriptedConsole;
pub use static_resolver::StaticResolver;
