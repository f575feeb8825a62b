use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{error::DomainError, value_objects::FieldType};

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(\.[a-z]+)*$").expect("package pattern is valid"));

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").expect("identifier pattern is valid")
});

/// Reserved for the implicit identifier field.
pub const RESERVED_FIELD_NAME: &str = "id";

/// Centralized input validation.
///
/// The `is_*` predicates answer yes/no; the `validate_*` functions return the
/// accepted value or a [`DomainError`] naming the offending input and the
/// expected format. Callers decide whether a failure skips or aborts.
pub struct DomainValidator;

impl DomainValidator {
    /// Lowercase letter segments separated by single dots.
    pub fn is_valid_package_name(s: &str) -> bool {
        PACKAGE_NAME.is_match(s)
    }

    /// Java identifier: letter, `_` or `$`, then letters, digits, `_` or `$`.
    pub fn is_valid_identifier(s: &str) -> bool {
        IDENTIFIER.is_match(s)
    }

    pub fn is_known_type(s: &str) -> bool {
        FieldType::ALL.iter().any(|t| t.as_str() == s)
    }

    pub fn validate_package_name(s: &str) -> Result<String, DomainError> {
        if Self::is_valid_package_name(s) {
            Ok(s.to_string())
        } else {
            Err(DomainError::InvalidPackageName {
                value: s.to_string(),
            })
        }
    }

    pub fn validate_entity_name(s: &str) -> Result<String, DomainError> {
        if s.is_empty() {
            return Err(DomainError::EmptyEntityName);
        }
        if !Self::is_valid_identifier(s) {
            return Err(DomainError::InvalidEntityName {
                value: s.to_string(),
            });
        }
        Ok(s.to_string())
    }

    /// Rejects empty names, the reserved `id` (any case) and non-identifiers.
    pub fn validate_field_name(s: &str) -> Result<String, DomainError> {
        if s.is_empty() {
            return Err(DomainError::EmptyFieldName);
        }
        if s.eq_ignore_ascii_case(RESERVED_FIELD_NAME) {
            return Err(DomainError::ReservedFieldName {
                value: s.to_string(),
            });
        }
        if !Self::is_valid_identifier(s) {
            return Err(DomainError::InvalidFieldName {
                value: s.to_string(),
            });
        }
        Ok(s.to_string())
    }

    pub fn validate_field_type(s: &str) -> Result<FieldType, DomainError> {
        s.parse()
    }
}
