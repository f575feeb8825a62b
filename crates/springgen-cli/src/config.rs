//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values handed to it
//! (run defaults, layout).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPRINGGEN_<SECTION>__<KEY>`, e.g.
//!    `SPRINGGEN_GENERATION__BASE_PACKAGE=org.acme`
//! 3. Config file (`--config FILE` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use springgen_core::{application::RunDefaults, domain::Layout};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults offered at the first two prompts.
    pub generation: GenerationConfig,
    /// Output layout variant.
    pub layout: Layout,
    /// Template source.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub output_path: String,
    pub base_package: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let defaults = RunDefaults::default();
        Self {
            output_path: defaults.output_path,
            base_package: defaults.base_package,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `.hbs` overrides; built-in templates when unset.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        if config_file.is_some() && !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
        }
        debug!(path = %path.display(), "Loading configuration");

        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode default config")?,
            )
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SPRINGGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the configuration file in use: `--config` if given, else the
    /// default location.
    pub fn resolve_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.springgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "springgen", "springgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".springgen.toml"))
    }

    /// Defaults for the interactive run.
    pub fn run_defaults(&self) -> RunDefaults {
        RunDefaults {
            output_path: self.generation.output_path.clone(),
            base_package: self.generation.base_package.clone(),
        }
    }
}
