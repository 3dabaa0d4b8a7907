use std::path::{Path, PathBuf};

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_OUTPUT_FILE_NAME, ENV_PREFIX, ENV_SEPARATOR,
};
use crate::types::CounterMode;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub translator: TranslatorConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    pub counter_mode: CounterMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_name: String,
    /// Write re-serialized cards instead of the translated text.
    pub normalize: bool,
}

impl OutputConfig {
    /// ## Summary
    /// Returns the path translated contacts are written to when no explicit
    /// output path is given.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` in the working directory.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// ## Summary
    /// Loads configuration like [`Settings::load`] but reads the TOML file at `path`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(with_defaults()?
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from defaults overlaid with an in-memory TOML document.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or holds invalid values.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(with_defaults()?
            .add_source(config::File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("logging.level", "info")?
        .set_default("translator.counter_mode", CounterMode::default().as_str())?
        .set_default("output.directory", DEFAULT_OUTPUT_DIRECTORY)?
        .set_default("output.file_name", DEFAULT_OUTPUT_FILE_NAME)?
        .set_default("output.normalize", false)?)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
mod tests;
