//! springgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for springgen, an
//! interactive generator of Spring Boot persistence-layer boilerplate,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          springgen-cli (CLI)            │
//! │   (Console prompter, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, RenderDispatcher)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Store, Renderer, Filesystem, Prompter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    springgen-adapters (Infrastructure)  │
//! │ (Handlebars, LocalFilesystem, Builtins) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (EntitySchema, TemplateData, RenderJob) │
//! │         No I/O, no templating           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use springgen_core::{
//!     application::{GenerateService, RenderDispatcher, RunDefaults},
//!     domain::{EntitySchema, FieldInput, TemplateData},
//! };
//!
//! // 1. Build a schema in code (the CLI builds one from prompts instead)
//! let schema = EntitySchema::builder("post", "com.example")?
//!     .field(FieldInput::new("title", "String").required(true).in_dto(true))?
//!     .build();
//!
//! // 2. Derive the template view-model
//! let data = TemplateData::assemble(&schema);
//! assert_eq!(data.package_name, "com.example.post");
//!
//! // 3. Render with injected adapters
//! let dispatcher = RenderDispatcher::new(store, renderer, filesystem);
//! let report = dispatcher.dispatch("./generated-src/main/java".as_ref(), &data);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, DispatchReport, GenerateService, GenerationReport, RenderDispatcher,
        RunDefaults, WrittenFile,
        ports::{Filesystem, Prompter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, DomainError, EntityPlacement, EntitySchema, Field, FieldInput, FieldType,
        Layout, RenderJob, SchemaBuilder, TemplateData,
    };
    pub use crate::error::{ErrorCategory, SpringgenError, SpringgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
