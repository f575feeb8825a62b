//! Template data assembly.
//!
//! [`TemplateData`] is the view-model every artifact template renders
//! against. It is derived entirely from a frozen [`EntitySchema`] and a
//! [`Layout`]; nothing here touches I/O.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{
    entities::{field::Field, layout::Layout, schema::EntitySchema},
    naming,
    value_objects::ArtifactKind,
};

/// The assembled view-model, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    /// `Post`
    pub entity_name: String,
    /// `post`
    pub uncapitalized_entity_name: String,
    /// `com.example`
    pub base_package: String,
    /// `com.example.post`
    pub package_name: String,
    /// `com/example/post`
    pub package_path: String,
    /// Package the entity class is declared in; depends on the layout.
    pub entity_package: String,
    pub fields: Vec<Field>,
    pub fields_for_dto: Vec<Field>,
    pub has_required_field_in_dto: bool,
    pub include_mapper: bool,
    /// Sorted imports needed by the entity's field types.
    pub imports: Vec<String>,
    /// Sorted imports needed by the DTO's field types.
    pub dto_imports: Vec<String>,
}

impl TemplateData {
    /// Assemble with the canonical layout.
    pub fn assemble(schema: &EntitySchema) -> Self {
        Self::assemble_with(schema, &Layout::default())
    }

    pub fn assemble_with(schema: &EntitySchema, layout: &Layout) -> Self {
        let entity_name = schema.entity_name().to_string();
        let uncapitalized_entity_name = naming::uncapitalize(&entity_name);
        let package_name = format!("{}.{}", schema.base_package(), uncapitalized_entity_name);

        let entity_package = match ArtifactKind::Entity.subpackage(layout.entity_placement) {
            Some(sub) => format!("{package_name}.{sub}"),
            None => package_name.clone(),
        };

        let fields = schema.fields().to_vec();
        let fields_for_dto: Vec<Field> = fields
            .iter()
            .filter(|f| f.projects_into_dto())
            .cloned()
            .collect();
        let has_required_field_in_dto = fields_for_dto.iter().any(|f| f.is_required);

        Self {
            package_path: naming::package_to_slashes(&package_name),
            imports: imports_for(&fields),
            dto_imports: imports_for(&fields_for_dto),
            entity_name,
            uncapitalized_entity_name,
            base_package: schema.base_package().to_string(),
            package_name,
            entity_package,
            fields,
            fields_for_dto,
            has_required_field_in_dto,
            include_mapper: layout.include_mapper,
        }
    }
}

fn imports_for(fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|f| f.field_type.java_import())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
