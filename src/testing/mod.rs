mod env_guard;
mod fixed_context;
mod memory_inputs;

pub use env_guard::EnvVarGuard;
pub use fixed_context::FixedContext;
pub use memory_inputs::MemoryInputs;
