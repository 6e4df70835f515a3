//! Application configuration
//!
//! There is no config file: pins, contrast, interface, sensor
//! path and timing are deployment constants. They are gathered here once at
//! startup and passed down explicitly.

use pi_sens_core::{DisplayConfig, MonitorConfig};
use serde::{Deserialize, Serialize};

/// Application-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// LCD wiring and contrast
    pub display: DisplayConfig,
    /// Metric sources and refresh timing
    pub monitor: MonitorConfig,
}

impl AppConfig {
    /// Human-readable dump for debug logging
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}
