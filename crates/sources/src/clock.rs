//! Wall-clock reader

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use pi_sens_core::{AcquisitionError, MetricKind, MetricReader, RawSample, ReaderMetadata};
use pi_sens_types::ClockReading;

/// Local wall-clock time. Cannot fail.
pub struct ClockReader {
    metadata: ReaderMetadata,
}

impl ClockReader {
    pub fn new() -> Self {
        let metadata = ReaderMetadata {
            id: "clock".to_string(),
            name: "Clock".to_string(),
            description: "Local date and time".to_string(),
            kind: MetricKind::Clock,
        };

        Self { metadata }
    }
}

impl Default for ClockReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a timestamp into the parts shown on the display
pub fn clock_reading<Tz: TimeZone>(now: &DateTime<Tz>) -> ClockReading {
    ClockReading {
        day: now.day(),
        hour: now.hour(),
        minute: now.minute(),
        second: now.second(),
        weekday: now.weekday().num_days_from_sunday(),
    }
}

impl MetricReader for ClockReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<RawSample, AcquisitionError> {
        Ok(RawSample::Clock(clock_reading(&Local::now())))
    }
}
