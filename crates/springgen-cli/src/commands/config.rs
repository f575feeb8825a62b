//! `springgen config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.value(&value)?;
        }

        ConfigCommands::List => {
            let text = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Current configuration:")?;
            output.value(text.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            output.value(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "generation.output_path" => Ok(config.generation.output_path.clone()),
        "generation.base_package" => Ok(config.generation.base_package.clone()),
        "layout.entity_placement" => Ok(config.layout.entity_placement.to_string()),
        "layout.include_mapper" => Ok(config.layout.include_mapper.to_string()),
        "templates.directory" => Ok(config
            .templates
            .directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use springgen_core::domain::EntityPlacement;

    #[test]
    fn get_generation_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "generation.base_package").unwrap(),
            "com.example"
        );
        assert_eq!(
            get_config_value(&cfg, "generation.output_path").unwrap(),
            "./generated-src/main/java/"
        );
    }

    #[test]
    fn get_layout_values() {
        let mut cfg = AppConfig::default();
        cfg.layout.entity_placement = EntityPlacement::Subpackage;
        cfg.layout.include_mapper = false;
        assert_eq!(
            get_config_value(&cfg, "layout.entity_placement").unwrap(),
            "subpackage"
        );
        assert_eq!(get_config_value(&cfg, "layout.include_mapper").unwrap(), "false");
    }

    #[test]
    fn unset_template_directory_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "templates.directory").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "defaults.lang"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
