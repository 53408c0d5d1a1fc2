pub mod error;
pub mod stub;
pub mod tool;

pub use error::GenerateError;
pub use stub::{compose_insert_text, struct_definition};
pub use tool::GeneratorTool;
