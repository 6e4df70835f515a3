//! Thermal zone temperature reader
//!
//! Linux exposes SoC temperature as a text file holding millidegrees Celsius,
//! e.g. `45123\n` for 45.123°C.

use pi_sens_core::{AcquisitionError, MetricKind, MetricReader, RawSample, ReaderMetadata};
use std::path::{Path, PathBuf};

/// Reads a sysfs thermal zone
pub struct ThermalZoneReader {
    metadata: ReaderMetadata,
    path: PathBuf,
}

impl ThermalZoneReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let metadata = ReaderMetadata {
            id: "temperature".to_string(),
            name: "CPU Temperature".to_string(),
            description: format!("Thermal sensor at {}", path.display()),
            kind: MetricKind::Temperature,
        };

        Self { metadata, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse the leading integer of a sensor readout.
///
/// Accepts leading whitespace, an optional sign, then digits; anything after
/// the digits is ignored. Returns `None` when there are no digits at all.
pub fn parse_millidegrees(content: &str) -> Option<i64> {
    let s = content.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

impl MetricReader for ThermalZoneReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<RawSample, AcquisitionError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| AcquisitionError::Io {
            path: self.path.clone(),
            source,
        })?;

        let millidegrees = parse_millidegrees(&content).ok_or_else(|| AcquisitionError::Parse {
            path: self.path.clone(),
            content: content.trim().to_string(),
        })?;

        Ok(RawSample::Temperature(millidegrees as f64 / 1000.0))
    }
}
