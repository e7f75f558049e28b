pub mod api;
pub mod cli;
pub mod commands;
pub mod logger;
mod context;

pub use context::AppContext;
