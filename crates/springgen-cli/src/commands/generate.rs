//! `springgen generate`: the interactive run.
//!
//! Builds the adapters, hands the console to [`GenerateService`], and turns
//! the resulting report into a summary on stdout.

use std::io::{self, IsTerminal as _};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use springgen_adapters::{BuiltinTemplates, DirectoryTemplates, HandlebarsRenderer, LocalFilesystem};
use springgen_core::{
    application::{GenerateService, GenerationReport, RenderDispatcher, RunDefaults, WrittenFile},
    prelude::TemplateStore,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::ConsolePrompter,
};

#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let defaults = run_defaults(&args, &config);
    let store = template_store(&args, &config)?;

    let dispatcher = RenderDispatcher::new(
        store,
        Box::new(HandlebarsRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_layout(config.layout);

    debug!(
        output_path = %defaults.output_path,
        base_package = %defaults.base_package,
        templates = %dispatcher.template_source(),
        placement = %config.layout.entity_placement,
        include_mapper = config.layout.include_mapper,
        "Generation settings"
    );
    let service = GenerateService::new(dispatcher, defaults);

    let color = !global.no_color && !config.output.no_color && io::stderr().is_terminal();
    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stderr(), color, global.quiet);

    let report = service.run(&mut prompter)?;
    info!(
        entity = %report.entity_name,
        files = report.written.len(),
        success = report.is_success(),
        "Run finished"
    );

    print_report(&report, &output)?;

    match report.failure {
        None => Ok(()),
        Some(e) => Err(CliError::Core(e)),
    }
}

/// Flag values win over the configured defaults.
fn run_defaults(args: &GenerateArgs, config: &AppConfig) -> RunDefaults {
    let mut defaults = config.run_defaults();
    if let Some(output) = &args.output {
        defaults.output_path = output.display().to_string();
    }
    if let Some(package) = &args.package {
        defaults.base_package = package.clone();
    }
    defaults
}

/// `--templates`, then `templates.directory`, then the built-in set.
fn template_store(args: &GenerateArgs, config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    let Some(dir) = args.templates.as_ref().or(config.templates.directory.as_ref()) else {
        return Ok(Box::new(BuiltinTemplates::new()));
    };

    if !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("Template directory '{}' does not exist", dir.display()),
            source: None,
        });
    }

    Ok(Box::new(DirectoryTemplates::new(dir.clone())))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    entity: &'a str,
    package: &'a str,
    output_root: &'a PathBuf,
    fields: usize,
    written: &'a [WrittenFile],
    success: bool,
    error: Option<String>,
}

impl<'a> From<&'a GenerationReport> for JsonReport<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            entity: &report.entity_name,
            package: &report.package_name,
            output_root: &report.output_root,
            fields: report.field_count,
            written: &report.written,
            success: report.is_success(),
            error: report.failure.as_ref().map(ToString::to_string),
        }
    }
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&JsonReport::from(report))?;
        return Ok(());
    }

    for file in &report.written {
        output.print(&format!("  {:<10} {}", file.kind.as_str(), file.path.display()))?;
    }

    if report.is_success() {
        output.success(&format!(
            "{} generated in package {} under {}",
            report.entity_name,
            report.package_name,
            report.output_root.display(),
        ))?;
    } else {
        output.warning(&format!(
            "Stopped after {} of the files for {}",
            report.written.len(),
            report.entity_name,
        ))?;
    }

    Ok(())
}
