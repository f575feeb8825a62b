//! Templates read from a user directory.

use std::path::PathBuf;

use tracing::{debug, instrument};

use springgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::ArtifactKind,
    error::SpringgenResult,
};

use crate::filesystem::map_io_error;

/// Reads `<root>/<TemplateName>.java.hbs` on every load.
///
/// There is no fallback: a file missing from the directory is a missing
/// template.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.root.join(kind.template_name())
    }
}

impl TemplateStore for DirectoryTemplates {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, kind: ArtifactKind) -> SpringgenResult<String> {
        let path = self.path_for(kind);

        if !path.is_file() {
            return Err(ApplicationError::TemplateMissing {
                artifact: kind,
                location: path.display().to_string(),
            }
            .into());
        }

        debug!(path = %path.display(), "Loading template");
        std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read template"))
    }

    fn describe(&self) -> String {
        format!("templates in {}", self.root.display())
    }
}
