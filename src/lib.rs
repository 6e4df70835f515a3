//! pi-Sens: system information on a PCD8544 (Nokia 5110) LCD
//!
//! This library provides the pieces the `pi-sens` binary wires together:
//! - Field formatting of raw metric samples into fixed-width lines
//! - The refresh loop that samples, formats and commits a frame each period
//! - Display surfaces (LCD emulation on a terminal, call recording)
//! - Startup configuration

pub mod config;
pub mod format;
pub mod refresh;
pub mod surface;

// Re-export commonly used types
pub use config::AppConfig;
pub use refresh::{Phase, RefreshLoop};
pub use surface::{RecordingSurface, TerminalSurface};
