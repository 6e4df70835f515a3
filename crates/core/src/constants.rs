//! Shared constants for the application

use std::time::Duration;

/// Bytes in a megabyte
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Pause between two committed frames
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// How long the splash logo stays up before the first frame
pub const SPLASH_DURATION: Duration = Duration::from_millis(2000);

/// PCD8544 panel width in pixels
pub const LCD_WIDTH: u8 = 84;

/// PCD8544 panel height in pixels
pub const LCD_HEIGHT: u8 = 48;

/// Glyph cell width of the built-in font
pub const GLYPH_WIDTH: u8 = 6;

/// Glyph cell height of the built-in font
pub const GLYPH_HEIGHT: u8 = 8;

/// Interface whose IPv4 address is shown
pub const DEFAULT_INTERFACE: &str = "eth0";

/// Thermal zone readout in millidegrees Celsius
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Divisor applied to the raw 1-minute load for the CPU line
pub const LOAD_DIVISOR: u64 = 1000;

/// Default LCD contrast (PCD8544 Vop). Usable range is roughly 30-90 depending on the panel.
pub const DEFAULT_CONTRAST: u8 = 30;

/// Highest contrast value the controller accepts (7-bit Vop)
pub const MAX_CONTRAST: u8 = 0x7f;
