// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for springgen.
//!
//! This module contains pure generation logic. All I/O, templating, and
//! prompting concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, console, or template engine calls
//! - **Immutable results**: a built `EntitySchema` never changes
//! - **Rich domain model**: validation lives with the types it protects
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    field::{Field, FieldInput},
    layout::Layout,
    render_job::RenderJob,
    schema::{EntitySchema, SchemaBuilder},
    template_data::TemplateData,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ArtifactKind, EntityPlacement, FieldType};

pub use validation::{DomainValidator, RESERVED_FIELD_NAME};
