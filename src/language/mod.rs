pub mod go;

pub use go::{is_interface_declaration, receiver_spec};
