// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ScanError};
use crate::extractor::ExtractorKind;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    #[serde(default = "default_extractors")]
    pub extractors: Vec<String>,
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extractors: default_extractors(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

fn default_extractors() -> Vec<String> {
    ExtractorKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

fn default_max_input_bytes() -> usize {
    10 * 1024 * 1024
}

impl Config {
    /// Layers built-in defaults, an optional TOML file and `NUMSCAN__*`
    /// environment variables. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NUMSCAN")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("scan.extractors")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Resolves the configured extractor names, in order.
    pub fn extractor_kinds(&self) -> Result<Vec<ExtractorKind>> {
        ExtractorKind::parse_list(&self.scan.extractors)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extractors.is_empty() {
            return Err(ScanError::Config(
                "scan.extractors must name at least one extractor".to_string(),
            ));
        }

        self.extractor_kinds()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        if self.scan.max_input_bytes == 0 {
            return Err(ScanError::Config(
                "max_input_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
