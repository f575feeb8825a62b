use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{layout::Layout, template_data::TemplateData},
    naming,
    value_objects::ArtifactKind,
};

/// One file to generate: which template, where it goes, what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub kind: ArtifactKind,
    pub template_name: &'static str,
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl RenderJob {
    pub fn new(kind: ArtifactKind, output_base: &Path, data: &TemplateData, layout: &Layout) -> Self {
        let mut output_dir = output_base.join(naming::package_to_path(&data.package_name));
        if let Some(sub) = kind.subpackage(layout.entity_placement) {
            output_dir.push(sub);
        }

        Self {
            kind,
            template_name: kind.template_name(),
            output_dir,
            file_name: format!("{}{}", data.entity_name, kind.file_suffix()),
        }
    }

    /// Every job for one run, in dispatch order.
    pub fn plan(output_base: &Path, data: &TemplateData, layout: &Layout) -> Vec<RenderJob> {
        layout
            .artifacts()
            .into_iter()
            .map(|kind| Self::new(kind, output_base, data, layout))
            .collect()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::schema::EntitySchema, value_objects::EntityPlacement};

    fn data() -> TemplateData {
        TemplateData::assemble(&EntitySchema::builder("post", "com.example").unwrap().build())
    }

    fn pkg() -> PathBuf {
        PathBuf::from("out").join("com").join("example").join("post")
    }

    #[test]
    fn canonical_paths() {
        let jobs = RenderJob::plan(Path::new("out"), &data(), &Layout::default());
        let paths: Vec<_> = jobs.iter().map(RenderJob::output_path).collect();

        assert_eq!(
            paths,
            vec![
                pkg().join("Post.java"),
                pkg().join("dto").join("PostDTO.java"),
                pkg().join("mapper").join("PostMapper.java"),
                pkg().join("repository").join("PostRepository.java"),
                pkg().join("service").join("PostService.java"),
                pkg().join("controller").join("PostController.java"),
            ]
        );
    }

    #[test]
    fn jobs_name_their_templates() {
        let jobs = RenderJob::plan(Path::new("out"), &data(), &Layout::default());
        assert_eq!(jobs[0].template_name, "Entity.java.hbs");
        assert_eq!(jobs[1].template_name, "DTO.java.hbs");
        assert_eq!(jobs[5].template_name, "Controller.java.hbs");
    }

    #[test]
    fn subpackage_variant_moves_entity_only() {
        let layout = Layout {
            entity_placement: EntityPlacement::Subpackage,
            include_mapper: true,
        };
        let jobs = RenderJob::plan(Path::new("out"), &data(), &layout);
        assert_eq!(jobs[0].output_path(), pkg().join("entity").join("Post.java"));
        assert_eq!(jobs[1].output_path(), pkg().join("dto").join("PostDTO.java"));
    }

    #[test]
    fn plan_is_deterministic() {
        let a = RenderJob::plan(Path::new("out"), &data(), &Layout::default());
        let b = RenderJob::plan(Path::new("out"), &data(), &Layout::default());
        assert_eq!(a, b);
    }
}
