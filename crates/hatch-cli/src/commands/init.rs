//! `hatch init`: write a default configuration file.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default configuration file at `--config` or the platform path.
pub fn execute(args: InitArgs, config_file: Option<&Path>, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::active_path(config_file);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn writes_loadable_default_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("hatch.toml");

        execute(InitArgs { force: false }, Some(&path), quiet_output()).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.toolchain.version, "1.15.0");
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hatch.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        execute(InitArgs { force: false }, Some(&path), quiet_output()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        execute(InitArgs { force: true }, Some(&path), quiet_output()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[toolchain]"));
    }
}
