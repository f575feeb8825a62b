//! Templates compiled into the binary.

use springgen_core::{
    application::ports::TemplateStore, domain::ArtifactKind, error::SpringgenResult,
};

const ENTITY: &str = include_str!("../../templates/Entity.java.hbs");
const DTO: &str = include_str!("../../templates/DTO.java.hbs");
const MAPPER: &str = include_str!("../../templates/Mapper.java.hbs");
const REPOSITORY: &str = include_str!("../../templates/Repository.java.hbs");
const SERVICE: &str = include_str!("../../templates/Service.java.hbs");
const CONTROLLER: &str = include_str!("../../templates/Controller.java.hbs");

/// The Spring Boot / JPA templates shipped with springgen.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Template text for `kind`. Every kind has one.
    pub fn source(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Entity => ENTITY,
            ArtifactKind::Dto => DTO,
            ArtifactKind::Mapper => MAPPER,
            ArtifactKind::Repository => REPOSITORY,
            ArtifactKind::Service => SERVICE,
            ArtifactKind::Controller => CONTROLLER,
        }
    }
}

impl TemplateStore for BuiltinTemplates {
    fn load(&self, kind: ArtifactKind) -> SpringgenResult<String> {
        Ok(Self::source(kind).to_string())
    }

    fn describe(&self) -> String {
        "built-in templates".into()
    }
}
