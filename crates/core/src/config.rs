//! Immutable hardware and monitor configuration
//!
//! Built once at startup and handed to whoever needs it. There is no config
//! file; the defaults are the deployment values.

use crate::constants::{
    DEFAULT_CONTRAST, DEFAULT_INTERFACE, MAX_CONTRAST, REFRESH_INTERVAL, SPLASH_DURATION,
    THERMAL_ZONE_PATH,
};
use crate::error::SurfaceError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// GPIO pin assignment (wiringPi numbering) for the PCD8544
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinConfig {
    pub sclk: u8,
    pub din: u8,
    pub dc: u8,
    pub cs: u8,
    pub rst: u8,
    pub vcc: u8,
    pub bl: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            sclk: 25,
            din: 24,
            dc: 23,
            cs: 22,
            rst: 21,
            vcc: 28,
            bl: 29,
        }
    }
}

impl PinConfig {
    pub fn as_array(&self) -> [u8; 7] {
        [self.sclk, self.din, self.dc, self.cs, self.rst, self.vcc, self.bl]
    }
}

/// Everything the display needs at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub pins: PinConfig,
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pins: PinConfig::default(),
            contrast: DEFAULT_CONTRAST,
        }
    }
}

impl DisplayConfig {
    /// Reject configurations no PCD8544 wiring can satisfy
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.contrast > MAX_CONTRAST {
            return Err(SurfaceError::InvalidConfig(format!(
                "contrast {} exceeds {}",
                self.contrast, MAX_CONTRAST
            )));
        }

        let pins = self.pins.as_array();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(SurfaceError::InvalidConfig(format!(
                    "pin {} is assigned twice",
                    pin
                )));
            }
        }

        Ok(())
    }
}

/// Where the metrics come from and how often the display refreshes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Network interface whose address is displayed
    pub interface: String,
    /// Thermal sensor readout
    pub thermal_path: PathBuf,
    /// Pause after each committed frame
    pub refresh_interval: Duration,
    /// Time the splash stays up
    pub splash_duration: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            thermal_path: PathBuf::from(THERMAL_ZONE_PATH),
            refresh_interval: REFRESH_INTERVAL,
            splash_duration: SPLASH_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_config_is_valid() {
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_pin_is_rejected() {
        let config = DisplayConfig {
            pins: PinConfig {
                cs: 25,
                ..PinConfig::default()
            },
            ..DisplayConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pin 25"));
    }

    #[test]
    fn test_contrast_out_of_range_is_rejected() {
        let config = DisplayConfig {
            contrast: 200,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SurfaceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_monitor_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.interface, "eth0");
        assert_eq!(
            config.thermal_path,
            PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
        );
        assert_eq!(config.refresh_interval, Duration::from_secs(1));
    }
}
