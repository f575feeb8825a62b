//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `springgen-adapters` crate provides implementations, except for the
//! console [`Prompter`] which lives in the CLI.

use crate::domain::{ArtifactKind, TemplateData};
use crate::error::SpringgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `springgen_adapters::filesystem::LocalFilesystem` (production)
/// - `springgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> SpringgenResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> SpringgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `springgen_adapters::template_store::BuiltinTemplates` (embedded)
/// - `springgen_adapters::template_store::DirectoryTemplates` (user overrides)
pub trait TemplateStore: Send + Sync {
    /// Template source for an artifact kind.
    ///
    /// Fails with `ApplicationError::TemplateMissing` when the store has no
    /// template for `kind`.
    fn load(&self, kind: ArtifactKind) -> SpringgenResult<String>;

    /// Human-readable description of where templates come from.
    fn describe(&self) -> String;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `springgen_adapters::renderer::HandlebarsRenderer`
///
/// Rendering is a pure function of the template text and the data.
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against `data`.
    ///
    /// # Arguments
    ///
    /// * `name` - Template name, used in error messages
    /// * `source` - Template text
    /// * `data` - Assembled template data
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> SpringgenResult<String>;
}

/// Port for the interactive console.
///
/// A prompter only yields raw strings and yes/no answers; deciding what is
/// valid is the orchestrator's job. End of input answers `""` to questions
/// and `false` to confirmations.
pub trait Prompter {
    /// Ask a question; an empty answer becomes `default` when one is given.
    fn ask(&mut self, label: &str, default: Option<&str>) -> SpringgenResult<String>;

    /// Ask a yes/no question. Only an explicit yes counts.
    fn confirm(&mut self, label: &str) -> SpringgenResult<bool>;

    /// Tell the user an answer was rejected and why.
    fn warn(&mut self, message: &str);

    /// Progress line (section headers, per-artifact status).
    fn status(&mut self, message: &str);
}
