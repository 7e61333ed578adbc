use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{InterpreterError, Result};
use crate::interpreter::DUST_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_dust_threshold")]
    pub dust_threshold: f64,
    /// Substring expected in the report's `meta.by` field.
    #[serde(default = "default_producer")]
    pub producer: String,
}

fn default_dust_threshold() -> f64 {
    DUST_THRESHOLD
}

fn default_producer() -> String {
    "xpub scan".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dust_threshold: default_dust_threshold(),
            producer: default_producer(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("scan-interpreter")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    if !settings.dust_threshold.is_finite() || settings.dust_threshold < 0.0 {
        return Err(InterpreterError::Settings(format!(
            "dust threshold must be a non-negative number, got {}",
            settings.dust_threshold
        )));
    }
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| InterpreterError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}
