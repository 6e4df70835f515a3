//! Aggregate system statistics reader (uptime, load, memory)

use pi_sens_core::{AcquisitionError, MetricKind, MetricReader, RawSample, ReaderMetadata};
use pi_sens_types::SystemStats;
use sysinfo::System;

/// System statistics reader
///
/// Takes uptime, load averages and RAM totals in one pass. Load averages are
/// handed on in the kernel's fixed-point form so the formatter sees the same
/// numbers `sysinfo(2)` reports.
pub struct SystemStatsReader {
    metadata: ReaderMetadata,
    system: System,
}

impl SystemStatsReader {
    pub fn new() -> Self {
        let metadata = ReaderMetadata {
            id: "system".to_string(),
            name: "System Statistics".to_string(),
            description: "Uptime, load averages and memory usage".to_string(),
            kind: MetricKind::System,
        };

        Self {
            metadata,
            system: System::new(),
        }
    }
}

impl Default for SystemStatsReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricReader for SystemStatsReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<RawSample, AcquisitionError> {
        self.system.refresh_memory();

        let total_ram = self.system.total_memory();
        let free_ram = self.system.free_memory();
        if total_ram == 0 {
            return Err(AcquisitionError::SystemInfo(
                "kernel reported zero total memory".to_string(),
            ));
        }

        let load = System::load_average();
        let stats = SystemStats::from_load_averages(
            System::uptime(),
            [load.one, load.five, load.fifteen],
            total_ram,
            free_ram,
        );

        log::trace!("System stats: {:?}", stats);
        Ok(RawSample::System(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_reads_live_system() {
        let mut reader = SystemStatsReader::new();
        match reader.read().unwrap() {
            RawSample::System(stats) => {
                assert!(stats.total_ram > 0);
                assert!(stats.free_ram <= stats.total_ram);
            }
            other => panic!("expected system stats, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_is_zeroed() {
        let reader = SystemStatsReader::new();
        assert_eq!(reader.fallback(), RawSample::System(SystemStats::default()));
    }
}
