//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `TemplateStore`: template lookup per artifact kind
//!   - `TemplateRenderer`: template rendering
//!   - `Prompter`: line-oriented console input
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, Prompter, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::MockFilesystem;
