// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the orchestrator reports them and keeps going)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant carries the offending value so the message can show what
/// was typed next to what was expected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Top-level input (aborts the run)
    // ========================================================================
    #[error("invalid base package '{value}': must be lowercase letters separated by dots (e.g. com.example)")]
    InvalidPackageName { value: String },

    #[error("entity name cannot be empty")]
    EmptyEntityName,

    #[error("invalid entity name '{value}': must be a valid Java identifier (letter, '_' or '$' first, then letters, digits, '_' or '$')")]
    InvalidEntityName { value: String },

    // ========================================================================
    // Field-level input (skips the field)
    // ========================================================================
    #[error("field name cannot be empty")]
    EmptyFieldName,

    #[error("field name '{value}' is reserved: the 'id' field is generated automatically")]
    ReservedFieldName { value: String },

    #[error("invalid field name '{value}': must be a valid Java identifier (letter, '_' or '$' first, then letters, digits, '_' or '$')")]
    InvalidFieldName { value: String },

    #[error("unsupported or empty field type '{value}': choose from {expected}")]
    UnknownFieldType { value: String, expected: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { value } => vec![
                format!("'{}' is not a valid base package", value),
                "Use lowercase letters only, separated by single dots".into(),
                "Examples: com.example, org.myproject".into(),
            ],
            Self::EmptyEntityName | Self::InvalidEntityName { .. } => vec![
                "Entity names must be valid Java identifiers".into(),
                "Examples: Post, User, OrderItem".into(),
            ],
            Self::EmptyFieldName => vec!["Type a field name, e.g. title, createdAt".into()],
            Self::ReservedFieldName { .. } => vec![
                "Every entity already gets a String 'id' field".into(),
                "Pick another name, e.g. title, createdAt".into(),
            ],
            Self::InvalidFieldName { value } => vec![
                format!("'{}' cannot be used as a Java field name", value),
                "No spaces or special characters; cannot start with a digit".into(),
            ],
            Self::UnknownFieldType { expected, .. } => vec![
                format!("Supported field types: {}", expected),
                "Type names are case-sensitive (String, not string)".into(),
                "Try: springgen types".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
