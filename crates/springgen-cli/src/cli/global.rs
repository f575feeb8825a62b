//! Flags accepted before or after any subcommand.

use clap::{ArgAction, Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show springgen's own diagnostics on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Log springgen's own diagnostics to stderr. Without the flag only \
                     warnings reach the log; -v adds the run summary, -vv the settings \
                     and each accepted field, -vvv every answer read from the console. \
                     RUST_LOG replaces this when set."
    )]
    pub verbose: u8,

    /// Hide progress lines and the closing summary.
    ///
    /// Questions and field warnings are still printed, since an interactive
    /// run cannot proceed without them. Values asked for explicitly
    /// (`config get`, `types`, JSON reports) are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide progress and summary; prompts still appear"
    )]
    pub quiet: bool,

    /// Never emit ANSI colour. Set implicitly by `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Read settings from this file instead of the per-user one.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Shape of the result printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Shape of what `generate` prints on stdout once the run ends.
///
/// Colour is a separate decision made from the terminal and `--no-color`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Written files and a one-line summary.
    #[default]
    Text,
    /// A single report object for scripts.
    Json,
}
