//! Entity schema and the accumulator that builds it.

use tracing::debug;

use crate::domain::{
    entities::field::{Field, FieldInput},
    error::DomainError,
    naming,
    validation::DomainValidator,
};

/// The frozen description of one entity.
///
/// Only [`SchemaBuilder::build`] creates one, so the id field is always
/// present at index 0 and no field is ever added afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    entity_name: String,
    base_package: String,
    fields: Vec<Field>,
}

impl EntitySchema {
    /// Start collecting fields for `entity_name` under `base_package`.
    pub fn builder(
        entity_name: &str,
        base_package: &str,
    ) -> Result<SchemaBuilder, DomainError> {
        SchemaBuilder::new(entity_name, base_package)
    }

    /// Capitalized entity name, e.g. `Post`.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// All fields, id first, then in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn id_field(&self) -> &Field {
        &self.fields[0]
    }
}

/// Explicit accumulator for the field-collection loop.
///
/// Each rejected [`FieldInput`] returns an error and leaves the builder as it
/// was, so one bad answer costs at most one field.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    entity_name: String,
    base_package: String,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Validates both names and seeds the implicit id field.
    pub fn new(entity_name: &str, base_package: &str) -> Result<Self, DomainError> {
        let base_package = DomainValidator::validate_package_name(base_package)?;
        let entity_name = DomainValidator::validate_entity_name(entity_name)?;

        Ok(Self {
            entity_name: naming::capitalize(&entity_name),
            base_package,
            fields: vec![Field::id()],
        })
    }

    /// Name check on its own, so a bad name can be rejected before asking
    /// for the rest of the field.
    pub fn check_name(&self, name: &str) -> Result<(), DomainError> {
        DomainValidator::validate_field_name(name).map(|_| ())
    }

    /// Validate and append one field.
    ///
    /// Duplicate non-id names are accepted as given.
    pub fn add(&mut self, input: FieldInput) -> Result<&Field, DomainError> {
        let name = DomainValidator::validate_field_name(&input.name)?;
        let field_type = DomainValidator::validate_field_type(&input.field_type)?;

        debug!(field = %name, field_type = %field_type, "field accepted");

        self.fields.push(Field {
            name,
            field_type,
            is_id: false,
            is_required: input.is_required,
            include_in_dto: input.include_in_dto,
        });

        Ok(&self.fields[self.fields.len() - 1])
    }

    /// Chainable variant of [`Self::add`] for building schemas in code.
    pub fn field(mut self, input: FieldInput) -> Result<Self, DomainError> {
        self.add(input)?;
        Ok(self)
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Number of fields so far, id included.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Freeze the accumulated fields.
    pub fn build(self) -> EntitySchema {
        EntitySchema {
            entity_name: self.entity_name,
            base_package: self.base_package,
            fields: self.fields,
        }
    }
}
