//! pi-sens-core: Core traits, errors and configuration for pi-Sens.
//!
//! This crate contains the fundamental traits (MetricReader, DisplaySurface),
//! the error taxonomy, the immutable startup configuration, and shared
//! constants.

pub mod config;
pub mod constants;
mod error;
mod reader;
mod surface;

pub use config::{DisplayConfig, MonitorConfig, PinConfig};
pub use constants::{
    BYTES_PER_MB, DEFAULT_CONTRAST, DEFAULT_INTERFACE, GLYPH_HEIGHT, GLYPH_WIDTH,
    LCD_HEIGHT, LCD_WIDTH, LOAD_DIVISOR, MAX_CONTRAST, REFRESH_INTERVAL, SPLASH_DURATION,
    THERMAL_ZONE_PATH,
};
pub use error::{AcquisitionError, SurfaceError};
pub use reader::{BoxedReader, MetricReader, ReaderMetadata};
pub use surface::DisplaySurface;

// Re-export types used in trait signatures for convenience
pub use pi_sens_types::{MetricKind, RawSample};
