pub mod field;
pub mod layout;
pub mod render_job;
pub mod schema;
pub mod template_data;

pub use crate::domain::DomainError;
pub use field::{Field, FieldInput};
pub use layout::Layout;
pub use render_job::RenderJob;
pub use schema::{EntitySchema, SchemaBuilder};
pub use template_data::TemplateData;
