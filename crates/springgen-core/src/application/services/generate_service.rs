//! Generate Service - the interactive run.
//!
//! One run, strictly in order:
//! 1. Output path (default applies on an empty answer)
//! 2. Base package (invalid aborts the run)
//! 3. Entity name (empty or invalid aborts the run)
//! 4. Field loop until the user declines; a bad field is skipped
//! 5. Assemble template data once
//! 6. Dispatch every artifact and report

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::Prompter,
        services::dispatch_service::{RenderDispatcher, WrittenFile},
    },
    domain::{DomainValidator, EntitySchema, FieldInput, SchemaBuilder, TemplateData},
    error::{SpringgenError, SpringgenResult},
};

/// Default answers offered at the first two prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDefaults {
    pub output_path: String,
    pub base_package: String,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            output_path: "./generated-src/main/java/".into(),
            base_package: "com.example".into(),
        }
    }
}

/// Result of a run that got as far as dispatching.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub entity_name: String,
    pub package_name: String,
    pub output_root: PathBuf,
    pub field_count: usize,
    pub written: Vec<WrittenFile>,
    pub failure: Option<SpringgenError>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Drives prompting, schema building and dispatch for one entity.
pub struct GenerateService {
    dispatcher: RenderDispatcher,
    defaults: RunDefaults,
}

impl GenerateService {
    pub fn new(dispatcher: RenderDispatcher, defaults: RunDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    pub fn defaults(&self) -> &RunDefaults {
        &self.defaults
    }

    /// Run the whole interaction.
    ///
    /// Returns `Err` only when nothing was written: an invalid package or
    /// entity name, or unreadable input. Dispatch failures come back inside
    /// the report together with the files written before them.
    #[instrument(skip_all)]
    pub fn run(&self, prompter: &mut dyn Prompter) -> SpringgenResult<GenerationReport> {
        let output_root = self.ask_output_root(prompter)?;

        let base_package = prompter.ask(
            "Base package (e.g. com.example, org.myproject)",
            Some(&self.defaults.base_package),
        )?;
        let base_package = DomainValidator::validate_package_name(base_package.trim())?;

        let entity_name = prompter.ask("Entity name (e.g. Post, User)", None)?;
        let builder = SchemaBuilder::new(entity_name.trim(), &base_package)?;

        info!(
            entity = %builder.entity_name(),
            package = %base_package,
            "Collecting fields"
        );

        let schema = Self::collect_fields(builder, prompter)?;
        self.render(&schema, output_root, prompter)
    }

    /// Render an already built schema. Used by the run and by callers that
    /// build schemas in code.
    pub fn render(
        &self,
        schema: &EntitySchema,
        output_root: PathBuf,
        prompter: &mut dyn Prompter,
    ) -> SpringgenResult<GenerationReport> {
        let data = TemplateData::assemble_with(schema, self.dispatcher.layout());

        prompter.status("Generating components...");
        let dispatch = self.dispatcher.dispatch(&output_root, &data);

        for file in &dispatch.written {
            prompter.status(&format!("Generated: {}", file.path.display()));
        }

        match &dispatch.failure {
            None => info!(files = dispatch.written.len(), "Generation complete"),
            Some(e) => warn!(
                error = %e,
                files = dispatch.written.len(),
                "Generation stopped"
            ),
        }

        Ok(GenerationReport {
            entity_name: data.entity_name,
            package_name: data.package_name,
            output_root,
            field_count: schema.fields().len(),
            written: dispatch.written,
            failure: dispatch.failure,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ask_output_root(&self, prompter: &mut dyn Prompter) -> SpringgenResult<PathBuf> {
        let answer = prompter.ask("Output path", Some(&self.defaults.output_path))?;
        let answer = answer.trim();
        let answer = if answer.is_empty() {
            self.defaults.output_path.as_str()
        } else {
            answer
        };
        Ok(PathBuf::from(answer))
    }

    /// Field loop. Rejected fields are reported and skipped; the loop ends
    /// when the user declines to add another.
    fn collect_fields(
        mut builder: SchemaBuilder,
        prompter: &mut dyn Prompter,
    ) -> SpringgenResult<EntitySchema> {
        while prompter.confirm("Add new field?")? {
            let name = prompter.ask("Field name", None)?;
            let name = name.trim();
            if let Err(e) = builder.check_name(name) {
                prompter.warn(&format!("{e}. Skipping field."));
                continue;
            }

            let field_type = prompter.ask("Field type (String, int, LocalDate, ...)", None)?;
            let field_type = field_type.trim();
            if let Err(e) = DomainValidator::validate_field_type(field_type) {
                prompter.warn(&format!("{e}. Skipping field."));
                continue;
            }

            let is_required = prompter.confirm("Is field required?")?;
            let include_in_dto = prompter.confirm("Include in DTO?")?;

            let input = FieldInput::new(name, field_type)
                .required(is_required)
                .in_dto(include_in_dto);

            match builder.add(input) {
                Ok(field) => debug!(field = %field.name, "Field added"),
                Err(e) => prompter.warn(&format!("{e}. Skipping field.")),
            }
        }

        debug!(fields = builder.field_count(), "Field collection finished");
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashMap, VecDeque},
        path::Path,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{Filesystem, TemplateRenderer, TemplateStore},
        },
        domain::{ArtifactKind, DomainError, FieldType},
    };

    /// Replays canned answers; `y`/`n` lines feed confirmations.
    struct Script {
        answers: VecDeque<&'static str>,
        warnings: Vec<String>,
        statuses: Vec<String>,
        asked: Vec<String>,
    }

    impl Script {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                warnings: Vec::new(),
                statuses: Vec::new(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Script {
        fn ask(&mut self, label: &str, default: Option<&str>) -> SpringgenResult<String> {
            self.asked.push(label.to_string());
            let answer = self.answers.pop_front().unwrap_or("");
            match (answer, default) {
                ("", Some(d)) => Ok(d.to_string()),
                (a, _) => Ok(a.to_string()),
            }
        }

        fn confirm(&mut self, label: &str) -> SpringgenResult<bool> {
            self.asked.push(label.to_string());
            Ok(self.answers.pop_front() == Some("y"))
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }

        fn status(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }
    }

    struct BrokenInput;

    impl Prompter for BrokenInput {
        fn ask(&mut self, _: &str, _: Option<&str>) -> SpringgenResult<String> {
            Err(ApplicationError::PromptFailed {
                reason: "closed".into(),
            }
            .into())
        }

        fn confirm(&mut self, _: &str) -> SpringgenResult<bool> {
            Ok(false)
        }

        fn warn(&mut self, _: &str) {}

        fn status(&mut self, _: &str) {}
    }

    struct Store;

    impl TemplateStore for Store {
        fn load(&self, kind: ArtifactKind) -> SpringgenResult<String> {
            Ok(kind.template_name().to_string())
        }

        fn describe(&self) -> String {
            "test".into()
        }
    }

    /// Lists the DTO field names so tests can see what reached the renderer.
    struct Renderer;

    impl TemplateRenderer for Renderer {
        fn render(&self, name: &str, _: &str, data: &TemplateData) -> SpringgenResult<String> {
            let names: Vec<_> = data.fields_for_dto.iter().map(|f| f.name.as_str()).collect();
            Ok(format!("{name}:{}", names.join(",")))
        }
    }

    #[derive(Clone, Default)]
    struct Fs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl Filesystem for Fs {
        fn create_dir_all(&self, _: &Path) -> SpringgenResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> SpringgenResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    fn service(fs: Fs) -> GenerateService {
        let dispatcher = RenderDispatcher::new(Box::new(Store), Box::new(Renderer), Box::new(fs));
        GenerateService::new(dispatcher, RunDefaults::default())
    }

    #[test]
    fn full_run_with_defaults() {
        let fs = Fs::default();
        let mut script = Script::new(&[
            "", "", "post", // path, package, entity
            "y", "title", "String", "y", "y", //
            "y", "views", "int", "n", "n", //
            "n",
        ]);

        let report = service(fs.clone()).run(&mut script).unwrap();

        assert!(report.is_success());
        assert_eq!(report.entity_name, "Post");
        assert_eq!(report.package_name, "com.example.post");
        assert_eq!(report.output_root, PathBuf::from("./generated-src/main/java/"));
        assert_eq!(report.field_count, 3);
        assert_eq!(report.written.len(), 6);
        assert!(script.warnings.is_empty());

        let files = fs.files.lock().unwrap();
        let dto = files
            .get(Path::new("./generated-src/main/java/com/example/post/dto/PostDTO.java"))
            .unwrap();
        assert_eq!(dto, "DTO.java.hbs:title");
    }

    #[test]
    fn invalid_package_aborts_before_entity_prompt() {
        let fs = Fs::default();
        let mut script = Script::new(&["out", "Com.Example", "Post"]);

        let err = service(fs.clone()).run(&mut script).unwrap_err();

        assert!(matches!(
            err,
            SpringgenError::Domain(DomainError::InvalidPackageName { .. })
        ));
        assert_eq!(script.asked.len(), 2);
        assert!(fs.files.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_entity_aborts() {
        let fs = Fs::default();
        let mut script = Script::new(&["out", "com.example", ""]);

        let err = service(fs.clone()).run(&mut script).unwrap_err();

        assert!(matches!(
            err,
            SpringgenError::Domain(DomainError::EmptyEntityName)
        ));
        assert!(fs.files.lock().unwrap().is_empty());
    }

    #[test]
    fn bad_fields_are_skipped_and_loop_continues() {
        let fs = Fs::default();
        let mut script = Script::new(&[
            "out", "com.example", "Post", //
            "y", "ID", // reserved, type never asked
            "y", "9lives", // not an identifier
            "y", "title", "Strin", // unknown type
            "y", "body", "String", "n", "y", //
            "n",
        ]);

        let report = service(fs).run(&mut script).unwrap();

        assert_eq!(script.warnings.len(), 3);
        assert!(script.warnings.iter().all(|w| w.ends_with("Skipping field.")));
        assert_eq!(report.field_count, 2);
        assert!(report.is_success());

        let type_prompts = script
            .asked
            .iter()
            .filter(|l| l.starts_with("Field type"))
            .count();
        assert_eq!(type_prompts, 2);
    }

    #[test]
    fn no_fields_still_generates() {
        let fs = Fs::default();
        let mut script = Script::new(&["out", "org.shop", "item", "n"]);

        let report = service(fs.clone()).run(&mut script).unwrap();

        assert_eq!(report.field_count, 1);
        assert!(fs
            .files
            .lock()
            .unwrap()
            .contains_key(Path::new("out/org/shop/item/Item.java")));
    }

    #[test]
    fn reports_each_generated_path() {
        let mut script = Script::new(&["out", "com.example", "Post", "n"]);
        service(Fs::default()).run(&mut script).unwrap();

        let generated: Vec<_> = script
            .statuses
            .iter()
            .filter(|s| s.starts_with("Generated: "))
            .collect();
        assert_eq!(generated.len(), 6);
    }

    #[test]
    fn unreadable_input_is_an_error() {
        let err = service(Fs::default()).run(&mut BrokenInput).unwrap_err();
        assert!(matches!(
            err,
            SpringgenError::Application(ApplicationError::PromptFailed { .. })
        ));
    }

    #[test]
    fn render_accepts_code_built_schema() {
        let schema = EntitySchema::builder("order", "com.shop")
            .unwrap()
            .field(FieldInput::new("placedOn", "LocalDate").required(true).in_dto(true))
            .unwrap()
            .build();
        assert_eq!(schema.fields()[1].field_type, FieldType::LocalDate);

        let mut script = Script::new(&[]);
        let report = service(Fs::default())
            .render(&schema, PathBuf::from("out"), &mut script)
            .unwrap();

        assert!(report.written[0].path.ends_with("com/shop/order/Order.java"));
    }
}
