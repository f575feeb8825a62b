//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! use cases: "render an entity's artifacts" and "run the interactive
//! generator".

pub mod dispatch_service;
pub mod generate_service;

pub use dispatch_service::{DispatchReport, RenderDispatcher, WrittenFile};
pub use generate_service::{GenerateService, GenerationReport, RunDefaults};
