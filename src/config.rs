use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::export::OutputFormat;
use crate::logging::LogConfig;

/// A raw sensor package: workout code plus its values in sensor order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Workout code (RUN, WLK, SWM)
    pub code: String,

    /// Sensor values
    pub data: Vec<f64>,
}

impl PackageEntry {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// Packages processed when no others are configured
pub fn default_packages() -> Vec<PackageEntry> {
    vec![
        PackageEntry::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        PackageEntry::new("RUN", vec![15000.0, 1.0, 75.0]),
        PackageEntry::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Summary output format
    pub output: OutputFormat,

    /// Logging settings
    pub logging: LogConfig,

    /// Sensor packages to process, in order
    pub packages: Vec<PackageEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output: OutputFormat::Text,
            logging: LogConfig::default(),
            packages: default_packages(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }
}
