//! Template stores: where artifact templates come from.

mod builtin;
mod directory;

pub use builtin::BuiltinTemplates;
pub use directory::DirectoryTemplates;
