pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod prompt;
pub mod services;

pub use context::AppContext;
