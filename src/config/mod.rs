// src/config/mod.rs
use crate::generator::GeneratorConfig;
use crate::visualization::VisualizationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub detector: DetectorConfig,
    pub generator: GeneratorConfig,
    pub visualization: VisualizationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectorConfig {
    /// Margin added on top of one standard deviation to widen the normal
    /// band. Must be non-negative.
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { threshold: 2.0 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub verdict_file: String,
    pub run_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            verdict_file: "verdicts.csv".to_string(),
            run_log: "stream-sentinel.log".to_string(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, String> {
    let config_str =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

    serde_yaml::from_str(&config_str).map_err(|e| format!("Failed to parse config file: {}", e))
}

pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), String> {
    let yaml =
        serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))?;

    fs::write(path, yaml).map_err(|e| format!("Failed to write config file: {}", e))
}
