//! Error types shared by readers and display surfaces

use pi_sens_types::LayoutError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single metric source could not be read.
///
/// Never fatal: the refresh loop logs it and shows the source's placeholder.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected content in {}: {content:?}", path.display())]
    Parse { path: PathBuf, content: String },
    #[error("network interface {0} not found")]
    InterfaceNotFound(String),
    #[error("network interface {0} has no IPv4 address")]
    NoIpv4Address(String),
    #[error("system information query failed: {0}")]
    SystemInfo(String),
}

/// Errors reported by a display surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("display used before initialization")]
    NotInitialized,
    #[error("invalid display configuration: {0}")]
    InvalidConfig(String),
    #[error("display initialization failed: {0}")]
    Init(String),
    #[error("text position ({x}, {y}) is outside the panel")]
    OutOfBounds { x: u8, y: u8 },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("display I/O error: {0}")]
    Io(#[from] io::Error),
}
