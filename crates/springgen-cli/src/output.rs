//! Stdout rendering for command results.
//!
//! Prompts and progress go to stderr through the prompter; everything a
//! script might capture (summaries, tables, JSON) goes through here.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes command results to stdout.
///
/// `--quiet` drops progress-style lines ([`print`](Self::print),
/// [`success`](Self::success), [`warning`](Self::warning),
/// [`header`](Self::header)) but never values or JSON.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_terminal(args, config, io::stdout().is_terminal())
    }

    fn with_terminal(args: &GlobalArgs, config: &AppConfig, is_tty: bool) -> Self {
        let format = args.output_format;
        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || format == OutputFormat::Json
                || !is_tty,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Line that survives `--quiet`: values asked for explicitly, such as
    /// `config get` or `types --format list`.
    pub fn value(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document. Never suppressed: callers asked for it.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn marked(&self, mark: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {msg}", paint(mark))
        };
        self.term.write_line(&line)
    }
}
