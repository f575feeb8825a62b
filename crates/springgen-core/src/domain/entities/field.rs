use serde::Serialize;

use crate::domain::{validation::RESERVED_FIELD_NAME, value_objects::FieldType};

/// One schema attribute as seen by the templates.
///
/// Serialized with the camelCase keys templates use:
/// `name`, `type`, `isId`, `isRequired`, `includeInDto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_id: bool,
    pub is_required: bool,
    pub include_in_dto: bool,
}

impl Field {
    /// The implicit identifier every schema starts with.
    pub fn id() -> Self {
        Self {
            name: RESERVED_FIELD_NAME.to_string(),
            field_type: FieldType::String,
            is_id: true,
            is_required: false,
            include_in_dto: true,
        }
    }

    /// Whether the field projects into the DTO artifact.
    ///
    /// The id is emitted by the DTO template on its own, so it never counts.
    pub fn projects_into_dto(&self) -> bool {
        self.include_in_dto && !self.is_id
    }
}

/// Raw answers for one field, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub field_type: String,
    pub is_required: bool,
    pub include_in_dto: bool,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            is_required: false,
            include_in_dto: false,
        }
    }

    pub fn required(mut self, yes: bool) -> Self {
        self.is_required = yes;
        self
    }

    pub fn in_dto(mut self, yes: bool) -> Self {
        self.include_in_dto = yes;
        self
    }
}
