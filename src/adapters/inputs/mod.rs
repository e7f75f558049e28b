//! Input readers: runner environment, TOML file, and a layering of the two.

mod env;
mod file;
mod layered;

pub use env::{EnvInputReader, input_env_key};
pub use file::FileInputReader;
pub use layered::LayeredInputReader;
