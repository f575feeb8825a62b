//! Infrastructure adapters for springgen.
//!
//! This crate implements the ports defined in `springgen-core::application::ports`.
//! It contains all external dependencies and I/O operations except the
//! console, which belongs to the CLI.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
pub use template_store::{BuiltinTemplates, DirectoryTemplates};
