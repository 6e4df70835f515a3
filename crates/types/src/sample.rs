//! Raw metric samples taken once per refresh

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Temperature reported when the thermal sensor cannot be read
pub const TEMPERATURE_SENTINEL: f64 = -1.0;

/// Fixed-point shift the kernel applies to load averages (`1 << 16` == 1.0)
pub const SI_LOAD_SHIFT: u32 = 16;

/// Which OS data source a sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "clock")]
    Clock,
    #[serde(rename = "address")]
    Address,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::System => "system",
            MetricKind::Temperature => "temperature",
            MetricKind::Clock => "clock",
            MetricKind::Address => "address",
        }
    }
}

/// Aggregate system information from a single OS query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    /// Seconds since boot
    pub uptime_secs: u64,
    /// 1, 5 and 15 minute load averages in kernel fixed-point
    pub loads: [u64; 3],
    /// Total usable RAM in bytes
    pub total_ram: u64,
    /// Free RAM in bytes
    pub free_ram: u64,
}

impl SystemStats {
    /// Build stats from floating-point load averages, re-encoding them the
    /// way the kernel exposes them through `sysinfo(2)`
    pub fn from_load_averages(
        uptime_secs: u64,
        loads: [f64; 3],
        total_ram: u64,
        free_ram: u64,
    ) -> Self {
        Self {
            uptime_secs,
            loads: loads.map(encode_load),
            total_ram,
            free_ram,
        }
    }
}

/// Convert a load average to the kernel's fixed-point representation
pub fn encode_load(load: f64) -> u64 {
    if !load.is_finite() || load <= 0.0 {
        return 0;
    }
    (load * f64::from(1u32 << SI_LOAD_SHIFT)).round() as u64
}

/// Wall-clock time split into the parts the display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Day of month, 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Days since Sunday, 0-6
    pub weekday: u32,
}

impl ClockReading {
    /// 1970-01-01 00:00:00, a Thursday
    pub const EPOCH: ClockReading = ClockReading {
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        weekday: 4,
    };
}

impl Default for ClockReading {
    fn default() -> Self {
        Self::EPOCH
    }
}

/// One metric measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawSample {
    #[serde(rename = "system")]
    System(SystemStats),
    /// Degrees Celsius, [`TEMPERATURE_SENTINEL`] when unavailable
    #[serde(rename = "temperature")]
    Temperature(f64),
    #[serde(rename = "clock")]
    Clock(ClockReading),
    #[serde(rename = "address")]
    Address(Option<Ipv4Addr>),
}

impl RawSample {
    pub fn kind(&self) -> MetricKind {
        match self {
            RawSample::System(_) => MetricKind::System,
            RawSample::Temperature(_) => MetricKind::Temperature,
            RawSample::Clock(_) => MetricKind::Clock,
            RawSample::Address(_) => MetricKind::Address,
        }
    }

    /// Whether the sample carries a real reading rather than a placeholder
    pub fn is_valid(&self) -> bool {
        match self {
            RawSample::System(stats) => stats.total_ram > 0,
            RawSample::Temperature(celsius) => *celsius != TEMPERATURE_SENTINEL,
            RawSample::Clock(_) => true,
            RawSample::Address(addr) => addr.is_some(),
        }
    }

    /// The placeholder shown when a source cannot be read
    pub fn unavailable(kind: MetricKind) -> Self {
        match kind {
            MetricKind::System => RawSample::System(SystemStats::default()),
            MetricKind::Temperature => RawSample::Temperature(TEMPERATURE_SENTINEL),
            MetricKind::Clock => RawSample::Clock(ClockReading::EPOCH),
            MetricKind::Address => RawSample::Address(None),
        }
    }
}

/// Everything sampled during one refresh.
///
/// Starts out fully degraded; each successful read overwrites its slot, so a
/// source that fails leaves only its own fields at their placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub system: SystemStats,
    pub temperature: f64,
    pub clock: ClockReading,
    pub address: Option<Ipv4Addr>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            system: SystemStats::default(),
            temperature: TEMPERATURE_SENTINEL,
            clock: ClockReading::EPOCH,
            address: None,
        }
    }
}

impl Snapshot {
    /// Store `sample` in the slot for its kind
    pub fn absorb(&mut self, sample: RawSample) {
        match sample {
            RawSample::System(stats) => self.system = stats,
            RawSample::Temperature(celsius) => self.temperature = celsius,
            RawSample::Clock(reading) => self.clock = reading,
            RawSample::Address(addr) => self.address = addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_load_matches_kernel_scaling() {
        assert_eq!(encode_load(1.0), 65536);
        assert_eq!(encode_load(0.5), 32768);
        assert_eq!(encode_load(0.0), 0);
        assert_eq!(encode_load(-3.0), 0);
        assert_eq!(encode_load(f64::NAN), 0);
    }

    #[test]
    fn test_unavailable_samples_are_invalid() {
        for kind in [MetricKind::System, MetricKind::Temperature, MetricKind::Address] {
            let sample = RawSample::unavailable(kind);
            assert_eq!(sample.kind(), kind);
            assert!(!sample.is_valid(), "{:?} placeholder should be invalid", kind);
        }
        // The clock cannot fail, its placeholder still reads as a time
        assert!(RawSample::unavailable(MetricKind::Clock).is_valid());
    }

    #[test]
    fn test_absorb_only_touches_own_slot() {
        let mut snapshot = Snapshot::default();
        let addr = Ipv4Addr::new(192, 168, 1, 42);
        snapshot.absorb(RawSample::Address(Some(addr)));

        assert_eq!(snapshot.address, Some(addr));
        assert_eq!(snapshot.temperature, TEMPERATURE_SENTINEL);
        assert_eq!(snapshot.system, SystemStats::default());
        assert_eq!(snapshot.clock, ClockReading::EPOCH);
    }

    #[test]
    fn test_sample_serialization() {
        let sample = RawSample::Temperature(45.123);
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"kind\":\"temperature\""));

        let deserialized: RawSample = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind(), MetricKind::Temperature);
    }
}
