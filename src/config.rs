//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! tide-config.toml file. It selects the station record to predict for and
//! sets the sampling window and interval used by the CLI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from tide-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Station selection
    pub station: StationSelection,
    /// Prediction window configuration
    pub prediction: PredictionConfig,
}

/// Which station record to predict for
#[derive(Debug, Deserialize, Serialize)]
pub struct StationSelection {
    /// Path to a station JSON file. When absent, the built-in
    /// Portland, ME constants are used.
    pub file: Option<String>,
    /// Human-readable label for log output
    pub name: String,
}

/// Sampling window and cadence for the CLI output
#[derive(Debug, Deserialize, Serialize)]
pub struct PredictionConfig {
    /// Total window in hours, centered on the current time
    pub window_hours: i64,
    /// Sampling interval in minutes (must be positive)
    pub interval_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            station: StationSelection {
                file: None,
                name: "Portland, ME (built-in)".to_string(),
            },
            prediction: PredictionConfig {
                window_hours: 24,
                interval_minutes: 15,
            },
        }
    }
}

impl Config {
    /// Load configuration from tide-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tide-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    println!("Loaded configuration for station: {}", config.station.name);
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (built-in Portland, ME)");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!(
                    "Info: No config file found, using default configuration (Portland, ME)"
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to tide-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("tide-config.toml", contents)?;
        println!("Configuration saved to tide-config.toml");
        Ok(())
    }
}
