//! Display surface trait

use crate::config::DisplayConfig;
use crate::error::SurfaceError;

/// Trait for the display the monitor draws on
///
/// Drawing is staged in an in-memory buffer; nothing reaches the panel until
/// [`commit`](DisplaySurface::commit). Every method other than
/// [`initialize`](DisplaySurface::initialize) fails with
/// [`SurfaceError::NotInitialized`] until initialization succeeds.
pub trait DisplaySurface {
    /// One-time hardware setup
    fn initialize(&mut self, config: &DisplayConfig) -> Result<(), SurfaceError>;

    /// Blank the staging buffer
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Stage `text` with its top-left corner at pixel (`x`, `y`)
    fn draw_text(&mut self, x: u8, y: u8, text: &str) -> Result<(), SurfaceError>;

    /// Push the staging buffer to the panel
    fn commit(&mut self) -> Result<(), SurfaceError>;

    /// Show the startup logo
    fn show_splash(&mut self) -> Result<(), SurfaceError>;
}
