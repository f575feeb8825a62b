//! Application layer for springgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, RenderDispatcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DispatchReport, GenerateService, GenerationReport, RenderDispatcher, RunDefaults, WrittenFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
