//! Render Dispatcher - turns template data into files.
//!
//! For each artifact kind, in fixed order:
//! 1. Load the template (missing template fails before anything is written
//!    for that artifact)
//! 2. Render it against the template data
//! 3. Ensure the output directory exists
//! 4. Write the file, overwriting unconditionally
//!
//! The first failure stops the run. Files written before it are kept; there
//! is no rollback.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{ArtifactKind, Layout, RenderJob, TemplateData},
    error::{SpringgenError, SpringgenResult},
};

/// A file produced by one render job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Outcome of one dispatch: what was written, and what stopped it if
/// anything did.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    pub written: Vec<WrittenFile>,
    pub failure: Option<SpringgenError>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.written.iter().map(|w| w.path.as_path()).collect()
    }
}

/// Renders and persists every artifact of a run.
pub struct RenderDispatcher {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: Layout,
}

impl RenderDispatcher {
    /// Create a dispatcher with the given adapters and the canonical layout.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use springgen_core::application::{RenderDispatcher, ports::*};
    ///
    /// let dispatcher = RenderDispatcher::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            layout: Layout::default(),
        }
    }

    /// Use a layout variant instead of the canonical one.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Where templates are loaded from, for display.
    pub fn template_source(&self) -> String {
        self.store.describe()
    }

    /// Render and write every artifact under `output_base`.
    #[instrument(
        skip_all,
        fields(
            entity = %data.entity_name,
            output_base = %output_base.display()
        )
    )]
    pub fn dispatch(&self, output_base: &Path, data: &TemplateData) -> DispatchReport {
        let jobs = RenderJob::plan(output_base, data, &self.layout);
        info!(jobs = jobs.len(), "Dispatching render jobs");

        let mut report = DispatchReport::default();

        for job in &jobs {
            match self.run_job(job, data) {
                Ok(path) => {
                    debug!(artifact = %job.kind, path = %path.display(), "Generated");
                    report.written.push(WrittenFile {
                        kind: job.kind,
                        path,
                    });
                }
                Err(e) => {
                    warn!(
                        artifact = %job.kind,
                        error = %e,
                        written = report.written.len(),
                        "Dispatch stopped; keeping files already written"
                    );
                    report.failure = Some(e);
                    break;
                }
            }
        }

        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_job(&self, job: &RenderJob, data: &TemplateData) -> SpringgenResult<PathBuf> {
        let source = self.store.load(job.kind)?;
        let content = self.renderer.render(job.template_name, &source, data)?;

        self.filesystem.create_dir_all(&job.output_dir)?;

        let path = job.output_path();
        self.filesystem.write_file(&path, &content)?;
        Ok(path)
    }
}
