//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template for an artifact could not be located.
    #[error("Template for {artifact} not found: {location}")]
    TemplateMissing {
        artifact: ArtifactKind,
        location: String,
    },

    /// Template rendering failed.
    #[error("Rendering {template} failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// Console input could not be read.
    #[error("Failed to read input: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { artifact, location } => vec![
                format!("No {} template at: {}", artifact, location),
                format!("Expected a file named {}", artifact.template_name()),
                "Remove the templates directory override to use the built-in templates".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the Handlebars syntax in {}", template),
                "Available helpers: capitalize, uncapitalize, toLowerCase, replace, eq, ne, or, and, not".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were kept".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "springgen is interactive: run it from a terminal or pipe answers on stdin".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
