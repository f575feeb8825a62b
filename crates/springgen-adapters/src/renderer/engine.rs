//! Handlebars renderer.

use handlebars::Handlebars;
use tracing::{debug, instrument};

use springgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateData,
    error::SpringgenResult,
};

use super::helpers;

/// Renders template text with Handlebars.
///
/// Output is Java source, so HTML escaping is off. Missing keys render as
/// empty strings.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        helpers::register_all(&mut registry);

        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self, source, data), fields(template = %name))]
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> SpringgenResult<String> {
        let rendered = self
            .registry
            .render_template(source, data)
            .map_err(|e| ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason: e.to_string(),
            })?;

        debug!(bytes = rendered.len(), "Rendered");
        Ok(rendered)
    }
}
