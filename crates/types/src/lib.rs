//! pi-sens-types: Shared data types for the pi-Sens LCD system monitor.
//!
//! Everything here lives for a single refresh: samples are read, turned into
//! bounded text lines, gathered into a frame, committed and dropped.

pub mod frame;
pub mod sample;
pub mod text;
pub mod weekday;

pub use frame::{DisplayFrame, FormattedLine, LayoutError, MAX_LINES, MIN_ROW_SPACING};
pub use sample::{
    encode_load, ClockReading, MetricKind, RawSample, Snapshot, SystemStats, SI_LOAD_SHIFT,
    TEMPERATURE_SENTINEL,
};
pub use text::{FieldText, FIELD_WIDTH};
pub use weekday::{weekday_abbrev, WEEKDAY_ABBREVIATIONS};
