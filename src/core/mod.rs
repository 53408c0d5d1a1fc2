pub mod error;
pub mod types;

pub use error::{ImplgenError, Result};
pub use types::{Position, WordSpan};
