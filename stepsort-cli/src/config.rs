//! Configuration loading from stepsort.toml
//!
//! Defaults can be specified in a `stepsort.toml` file, discovered by
//! walking up from the current directory. Command-line flags always win
//! over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// StepSort configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StepsortConfig {
    /// Sort run defaults
    #[serde(default)]
    pub run: RunConfig,
    /// Display defaults
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Defaults for a sort run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithm name, e.g. "Quick Sort"
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Dataset size (10..=1000)
    #[serde(default = "default_amount")]
    pub amount: usize,
    /// Pacing delay per comparison, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            amount: default_amount(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_algorithm() -> String {
    "Quick Sort".to_string()
}
fn default_amount() -> usize {
    50
}
fn default_delay_ms() -> f64 {
    5.0
}

/// Defaults for the display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display mode: "bars" or "trace"
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

fn default_mode() -> String {
    "bars".to_string()
}

impl StepsortConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("stepsort.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# StepSort Configuration

[run]
# Algorithm: "Selection Sort", "Insertion Sort", "Bubble Sort",
# "Merge Sort", or "Quick Sort"
algorithm = "Quick Sort"
# Dataset size (10 to 1000)
amount = 50
# Pacing delay per comparison, in milliseconds (0 to 1000)
delay_ms = 5.0

[display]
# Display mode: "bars" or "trace"
mode = "bars"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StepsortConfig::default();
        assert_eq!(config.run.algorithm, "Quick Sort");
        assert_eq!(config.run.amount, 50);
        assert_eq!(config.run.delay_ms, 5.0);
        assert_eq!(config.display.mode, "bars");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [run]
            algorithm = "Merge Sort"
            amount = 200
        "#;

        let config: StepsortConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.run.algorithm, "Merge Sort");
        assert_eq!(config.run.amount, 200);
        // Defaults should still apply
        assert_eq!(config.run.delay_ms, 5.0);
        assert_eq!(config.display.mode, "bars");
    }

    #[test]
    fn test_default_toml_parses() {
        let default_toml = StepsortConfig::default_toml();
        let config: StepsortConfig = toml::from_str(&default_toml).unwrap();
        assert_eq!(config.run.amount, 50);
    }
}
