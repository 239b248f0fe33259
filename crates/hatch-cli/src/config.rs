//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the values it needs
//! (the toolchain version, extra reserved names).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HATCH_*` environment variables, `__` between sections
//!    (`HATCH_TOOLCHAIN__VERSION=1.16.0`)
//! 3. Config file (`--config FILE` or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use hatch_core::domain::ToolVersion;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
};

const ENV_PREFIX: &str = "HATCH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Toolchain the generated manifests target.
    pub toolchain: ToolchainConfig,
    /// Module names treated as taken.
    pub namespace: NamespaceConfig,
    /// Template overrides.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Semver version; only major, minor and the first pre-release tag are used.
    pub version: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            version: "1.15.0".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Reserved in addition to the standard library modules.
    pub reserved: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `<template-id>.tmpl` overrides.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `HATCH_*`.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let loaded: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("namespace.reserved")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;

        debug!(?loaded, "configuration loaded");
        loaded.tool_version()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hatch.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "hatch", "hatch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".hatch.toml"))
    }

    /// The file that is actually read: `--config` if given, else the default.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Parsed `toolchain.version`.
    pub fn tool_version(&self) -> CliResult<ToolVersion> {
        ToolVersion::parse(&self.toolchain.version).map_err(|e| CliError::ConfigError {
            message: format!(
                "toolchain.version '{}' is not a valid version",
                self.toolchain.version
            ),
            source: Some(Box::new(e)),
        })
    }

    /// Look up a dotted key for `hatch config get`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "toolchain.version" => self.toolchain.version.clone(),
            "namespace.reserved" => self.namespace.reserved.join(","),
            "templates.dir" => display_opt(self.templates.dir.as_deref()),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => format!("{:?}", self.output.format).to_lowercase(),
            "logging.file" => display_opt(self.logging.file.as_deref()),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        };
        Ok(value)
    }
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
