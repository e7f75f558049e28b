mod input_reader;
mod repository_context;

pub use input_reader::InputReader;
pub use repository_context::RepositoryContext;
