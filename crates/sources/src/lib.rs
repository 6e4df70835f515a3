//! pi-sens-sources: Metric readers for pi-Sens.
//!
//! One reader per OS data source. Each is independent, so one failing source
//! never stops the others from being read.

mod address;
mod clock;
mod system;
mod thermal;

pub use address::{first_ipv4, AddressReader};
pub use clock::{clock_reading, ClockReader};
pub use system::SystemStatsReader;
pub use thermal::{parse_millidegrees, ThermalZoneReader};

use pi_sens_core::{BoxedReader, MonitorConfig};

/// All built-in readers in sampling order
pub fn default_readers(config: &MonitorConfig) -> Vec<BoxedReader> {
    log::info!(
        "Creating readers (interface {}, thermal zone {})",
        config.interface,
        config.thermal_path.display()
    );

    vec![
        Box::new(SystemStatsReader::new()),
        Box::new(ThermalZoneReader::new(config.thermal_path.clone())),
        Box::new(ClockReader::new()),
        Box::new(AddressReader::new(config.interface.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_sens_core::MetricKind;

    #[test]
    fn test_default_readers_cover_every_kind_once() {
        let readers = default_readers(&MonitorConfig::default());
        let kinds: Vec<MetricKind> = readers.iter().map(|r| r.metadata().kind).collect();
        assert_eq!(
            kinds,
            vec![
                MetricKind::System,
                MetricKind::Temperature,
                MetricKind::Clock,
                MetricKind::Address,
            ]
        );
    }
}
