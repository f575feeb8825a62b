//! Template rendering adapters.

mod engine;
pub mod helpers;

pub use engine::HandlebarsRenderer;
