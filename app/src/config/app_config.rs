//! Runtime generator configuration, validated from the CLI.

use std::path::PathBuf;

use device_id::{DeviceRange, UrlVariant};

use super::ConfigError;
use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_COLS, DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX,
    DEFAULT_START,
};
use super::validation::validate_setting;
use crate::cli::Cli;

/// Everything one run of the generator needs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub count: u32,
    pub prefix: String,
    pub start: u32,
    pub batch: bool,
    pub cols: u32,
    pub variant: UrlVariant,
    pub output_dir: PathBuf,
    pub font_path: Option<PathBuf>,
    pub sheet_only: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            count: DEFAULT_COUNT,
            prefix: DEFAULT_PREFIX.into(),
            start: DEFAULT_START,
            batch: false,
            cols: DEFAULT_COLS,
            variant: UrlVariant::Plain,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font_path: None,
            sheet_only: false,
        }
    }
}

impl GeneratorConfig {
    /// Build and validate the configuration from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: cli.url.trim().to_string(),
            count: cli.count,
            prefix: cli.prefix.trim().to_string(),
            start: cli.start,
            batch: cli.batch,
            cols: cli.cols,
            variant: UrlVariant::from_flags(cli.auto_connect, cli.with_mac),
            output_dir: cli.output_dir.clone(),
            font_path: cli.font.clone(),
            sheet_only: cli.sheet_only,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field; the first invalid one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("url", self.base_url.clone()),
            ("prefix", self.prefix.clone()),
            ("count", self.count.to_string()),
            ("start", self.start.to_string()),
            ("cols", self.cols.to_string()),
        ];
        for (field, value) in checks {
            validate_setting(field, &value).map_err(|reason| ConfigError::Invalid {
                field,
                value: value.clone(),
                reason,
            })?;
        }
        device_id::parse_base_url(&self.base_url)?;
        self.device_range()?;
        Ok(())
    }

    pub fn device_range(&self) -> Result<DeviceRange, ConfigError> {
        Ok(DeviceRange::new(&self.prefix, self.start, self.count)?)
    }
}
