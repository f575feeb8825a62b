//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "springgen",
    bin_name = "springgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Spring Boot boilerplate generator",
    long_about = "springgen asks for an entity, its package and its fields, then writes \
                  the entity, DTO, mapper, repository, service and controller classes \
                  into a package-structured source tree.",
    after_help = "EXAMPLES:\n\
        \x20 springgen generate\n\
        \x20 springgen generate --output src/main/java --package com.acme.blog\n\
        \x20 springgen types\n\
        \x20 springgen completions bash > /usr/share/bash-completion/completions/springgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactively describe an entity and generate its classes.
    #[command(
        visible_alias = "g",
        about = "Generate entity, DTO, mapper, repository, service and controller",
        after_help = "EXAMPLES:\n\
            \x20 springgen generate\n\
            \x20 springgen g --package com.acme.shop\n\
            \x20 springgen g --output ./src/main/java --templates ./my-templates\n\
            \x20 printf './out\\ncom.example\\nPost\\nn\\n' | springgen g"
    )]
    Generate(GenerateArgs),

    /// List the field types entities may declare.
    #[command(
        about = "List supported field types",
        after_help = "EXAMPLES:\n\
            \x20 springgen types\n\
            \x20 springgen types --format json"
    )]
    Types(TypesArgs),

    /// Initialise a springgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 springgen init                      # default location\n\
            \x20 springgen --config ./springgen.toml init\n\
            \x20 springgen init --force              # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 springgen completions bash > ~/.local/share/bash-completion/completions/springgen\n\
            \x20 springgen completions zsh  > ~/.zfunc/_springgen\n\
            \x20 springgen completions fish > ~/.config/fish/completions/springgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the springgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 springgen config get generation.base_package\n\
            \x20 springgen config list\n\
            \x20 springgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `springgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Default answer for the output path prompt.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Default output directory (offered at the first prompt)"
    )]
    pub output: Option<PathBuf>,

    /// Default answer for the base package prompt.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PKG",
        help = "Default base package (offered at the second prompt)"
    )]
    pub package: Option<String>,

    /// Read templates from a directory instead of the built-in set.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Directory containing Entity.java.hbs, DTO.java.hbs, ..."
    )]
    pub templates: Option<PathBuf>,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `springgen types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `springgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `springgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `springgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.base_package`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
