//! Metric reader trait and related types

use crate::error::AcquisitionError;
use pi_sens_types::{MetricKind, RawSample};

/// Metadata about a metric reader
#[derive(Debug, Clone)]
pub struct ReaderMetadata {
    /// Unique identifier for this reader
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of the OS data source behind it
    pub description: String,
    /// Kind of sample this reader produces
    pub kind: MetricKind,
}

/// Trait for all metric readers
///
/// A reader queries one OS data source per call and returns a single sample.
/// Readers hold no data between calls beyond OS handles.
pub trait MetricReader: Send {
    /// Get metadata about this reader
    fn metadata(&self) -> &ReaderMetadata;

    /// Query the data source
    fn read(&mut self) -> Result<RawSample, AcquisitionError>;

    /// Sample shown in place of a failed read
    fn fallback(&self) -> RawSample {
        RawSample::unavailable(self.metadata().kind)
    }

    /// Read, degrading to [`fallback`](Self::fallback) on failure
    fn read_or_fallback(&mut self) -> RawSample {
        match self.read() {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("{} reader failed: {}", self.metadata().id, e);
                self.fallback()
            }
        }
    }
}

/// Type-erased reader for dynamic dispatch
pub type BoxedReader = Box<dyn MetricReader>;
