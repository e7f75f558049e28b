pub mod inputs;
pub mod repository_context;
pub mod workflow_commands;
