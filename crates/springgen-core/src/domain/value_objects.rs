//! Domain value objects: FieldType, ArtifactKind, EntityPlacement.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and the `FieldType` parser.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add it to the `ALL` table and the `as_str` arm
//! 3. Done: parsing, listing and validation pick it up

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldType ────────────────────────────────────────────────────────────────

/// The closed vocabulary of Java field types an entity may declare.
///
/// Parsing is exact and case-sensitive: `"string"` is rejected, `"String"`
/// is accepted. Nothing outside this set is coerced or inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Int,
    Long,
    Boolean,
    Date,
    LocalDate,
    LocalDateTime,
    Instant,
    Uuid,
    Double,
    Float,
}

impl FieldType {
    /// Every supported type, in the order they are listed to users.
    pub const ALL: [FieldType; 11] = [
        Self::String,
        Self::Int,
        Self::Long,
        Self::Boolean,
        Self::Date,
        Self::LocalDate,
        Self::LocalDateTime,
        Self::Instant,
        Self::Uuid,
        Self::Double,
        Self::Float,
    ];

    /// The Java spelling used in generated code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "int",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::LocalDate => "LocalDate",
            Self::LocalDateTime => "LocalDateTime",
            Self::Instant => "Instant",
            Self::Uuid => "UUID",
            Self::Double => "Double",
            Self::Float => "Float",
        }
    }

    /// Fully qualified import needed to use this type, if any.
    pub const fn java_import(&self) -> Option<&'static str> {
        match self {
            Self::Date => Some("java.util.Date"),
            Self::Uuid => Some("java.util.UUID"),
            Self::LocalDate => Some("java.time.LocalDate"),
            Self::LocalDateTime => Some("java.time.LocalDateTime"),
            Self::Instant => Some("java.time.Instant"),
            _ => None,
        }
    }

    /// Comma-separated list of all accepted spellings.
    pub fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(FieldType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFieldType {
                value: s.to_string(),
                expected: Self::vocabulary(),
            })
    }
}

impl Serialize for FieldType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// One category of generated file.
///
/// The declaration order is the dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Entity,
    Dto,
    Mapper,
    Repository,
    Service,
    Controller,
}

impl ArtifactKind {
    /// All artifact kinds in dispatch order.
    pub const ALL: [ArtifactKind; 6] = [
        Self::Entity,
        Self::Dto,
        Self::Mapper,
        Self::Repository,
        Self::Service,
        Self::Controller,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Dto => "dto",
            Self::Mapper => "mapper",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// File name of the template that renders this artifact.
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Entity => "Entity.java.hbs",
            Self::Dto => "DTO.java.hbs",
            Self::Mapper => "Mapper.java.hbs",
            Self::Repository => "Repository.java.hbs",
            Self::Service => "Service.java.hbs",
            Self::Controller => "Controller.java.hbs",
        }
    }

    /// Appended to the entity name to form the output file name.
    pub const fn file_suffix(&self) -> &'static str {
        match self {
            Self::Entity => ".java",
            Self::Dto => "DTO.java",
            Self::Mapper => "Mapper.java",
            Self::Repository => "Repository.java",
            Self::Service => "Service.java",
            Self::Controller => "Controller.java",
        }
    }

    /// Subpackage the artifact lives in, relative to the entity's package.
    ///
    /// `None` means the package directory itself.
    pub const fn subpackage(&self, placement: EntityPlacement) -> Option<&'static str> {
        match (self, placement) {
            (Self::Entity, EntityPlacement::PackageRoot) => None,
            _ => Some(self.as_str()),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EntityPlacement ──────────────────────────────────────────────────────────

/// Where the entity class goes relative to the entity package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityPlacement {
    /// `<package>/Post.java`
    #[default]
    PackageRoot,
    /// `<package>/entity/Post.java`
    Subpackage,
}

impl EntityPlacement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PackageRoot => "package-root",
            Self::Subpackage => "subpackage",
        }
    }
}

impl fmt::Display for EntityPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
