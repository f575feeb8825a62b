use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ArtifactKind, EntityPlacement};

/// Output layout variant.
///
/// The default is the canonical layout: entity class directly in the entity
/// package, all six artifacts generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub entity_placement: EntityPlacement,
    pub include_mapper: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            entity_placement: EntityPlacement::PackageRoot,
            include_mapper: true,
        }
    }
}

impl Layout {
    /// Artifact kinds this layout generates, in dispatch order.
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.include_mapper || *kind != ArtifactKind::Mapper)
            .collect()
    }
}
