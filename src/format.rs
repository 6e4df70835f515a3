//! Field formatter
//!
//! Turns raw samples into the six text lines of the display. Every function
//! here is pure and writes into a [`FieldText`], so no input magnitude can
//! push a field past its width.

use pi_sens_core::{BYTES_PER_MB, GLYPH_HEIGHT, LOAD_DIVISOR};
use pi_sens_types::{
    weekday_abbrev, ClockReading, DisplayFrame, FieldText, FormattedLine, LayoutError, Snapshot,
};
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Shown instead of a weekday name for an out-of-range index
const UNKNOWN_WEEKDAY: &str = "???";

/// Fixed position of each field on the panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Uptime,
    Load,
    Memory,
    Temperature,
    Time,
    Address,
}

impl FieldSlot {
    pub const ALL: [FieldSlot; 6] = [
        FieldSlot::Uptime,
        FieldSlot::Load,
        FieldSlot::Memory,
        FieldSlot::Temperature,
        FieldSlot::Time,
        FieldSlot::Address,
    ];

    /// Pixel row of the field
    pub fn row(self) -> u8 {
        let index = match self {
            FieldSlot::Uptime => 0,
            FieldSlot::Load => 1,
            FieldSlot::Memory => 2,
            FieldSlot::Temperature => 3,
            FieldSlot::Time => 4,
            FieldSlot::Address => 5,
        };
        index * GLYPH_HEIGHT
    }

    /// Pixel column of the field
    pub fn column(self) -> u8 {
        0
    }
}

/// `Up <minutes> min`
pub fn format_uptime(uptime_secs: u64) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(text, "Up {} min", uptime_secs / 60);
    text
}

/// `CPU <n>%`
///
/// `n` is the raw fixed-point 1-minute load divided by [`LOAD_DIVISOR`]. This
/// is not a utilisation percentage (1.00 load reads as 65%), but it is the
/// value the display has always shown.
pub fn format_load(loads: &[u64; 3]) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(text, "CPU {}%", loads[0] / LOAD_DIVISOR);
    text
}

/// RAM figures in whole megabytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total_mb: u64,
    pub free_mb: u64,
    pub used_mb: u64,
    /// Used share of total, 0-100
    pub load_pct: u64,
}

impl MemoryUsage {
    pub fn from_bytes(total_bytes: u64, free_bytes: u64) -> Self {
        let total_mb = total_bytes / BYTES_PER_MB;
        let free_mb = (free_bytes / BYTES_PER_MB).min(total_mb);
        let used_mb = total_mb - free_mb;
        let load_pct = if total_mb > 0 {
            used_mb * 100 / total_mb
        } else {
            0
        };

        Self {
            total_mb,
            free_mb,
            used_mb,
            load_pct,
        }
    }
}

/// `RAM <used>M <pct>`, used padded to three digits and pct to two
pub fn format_memory(total_bytes: u64, free_bytes: u64) -> FieldText {
    let usage = MemoryUsage::from_bytes(total_bytes, free_bytes);
    let mut text = FieldText::new();
    let _ = write!(text, "RAM {:03}M {:02}", usage.used_mb, usage.load_pct);
    text
}

/// `TEM <deg>C <Wkd>`
///
/// Degrees are truncated toward zero, so the -1 sentinel shows as `-1`.
pub fn format_temperature(celsius: f64, weekday: u32) -> FieldText {
    let degrees = celsius.trunc() as i64;
    let day = weekday_abbrev(weekday).unwrap_or(UNKNOWN_WEEKDAY);

    let mut text = FieldText::new();
    let _ = write!(text, "TEM {:02}C {}", degrees, day);
    text
}

/// `<day> <hour>:<minute>:<second>`, unpadded
pub fn format_time(clock: &ClockReading) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(
        text,
        "{} {}:{}:{}",
        clock.day, clock.hour, clock.minute, clock.second
    );
    text
}

/// Dotted-decimal address, or nothing
pub fn format_address(addr: Option<Ipv4Addr>) -> FieldText {
    let mut text = FieldText::new();
    if let Some(addr) = addr {
        let _ = write!(text, "{}", addr);
    }
    text
}

/// Text for one slot of the panel
pub fn format_field(slot: FieldSlot, snapshot: &Snapshot) -> FieldText {
    match slot {
        FieldSlot::Uptime => format_uptime(snapshot.system.uptime_secs),
        FieldSlot::Load => format_load(&snapshot.system.loads),
        FieldSlot::Memory => format_memory(snapshot.system.total_ram, snapshot.system.free_ram),
        FieldSlot::Temperature => format_temperature(snapshot.temperature, snapshot.clock.weekday),
        FieldSlot::Time => format_time(&snapshot.clock),
        FieldSlot::Address => format_address(snapshot.address),
    }
}

/// Lay out every field of `snapshot`
pub fn format_frame(snapshot: &Snapshot) -> Result<DisplayFrame, LayoutError> {
    let mut frame = DisplayFrame::new();
    for slot in FieldSlot::ALL {
        frame.push(FormattedLine::new(
            slot.column(),
            slot.row(),
            format_field(slot, snapshot),
        ))?;
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_sens_types::{SystemStats, FIELD_WIDTH, TEMPERATURE_SENTINEL};
    use proptest::prelude::*;

    const MB: u64 = 1024 * 1024;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            system: SystemStats {
                uptime_secs: 3725,
                loads: [12_345, 8_000, 4_000],
                total_ram: 948 * MB,
                free_ram: 474 * MB,
            },
            temperature: 45.123,
            clock: ClockReading {
                day: 7,
                hour: 9,
                minute: 5,
                second: 3,
                weekday: 2,
            },
            address: Some(Ipv4Addr::new(192, 168, 1, 42)),
        }
    }

    #[test]
    fn test_uptime() {
        assert_eq!(format_uptime(125), "Up 2 min");
        assert_eq!(format_uptime(59), "Up 0 min");
    }

    #[test]
    fn test_load_keeps_raw_scaling() {
        assert_eq!(format_load(&[65_536, 0, 0]), "CPU 65%");
        assert_eq!(format_load(&[999, 0, 0]), "CPU 0%");
    }

    #[test]
    fn test_memory() {
        assert_eq!(format_memory(948 * MB, 474 * MB), "RAM 474M 50");
        assert_eq!(format_memory(1024 * MB, 1000 * MB), "RAM 024M 02");
        assert_eq!(format_memory(0, 0), "RAM 000M 00");
    }

    #[test]
    fn test_memory_free_above_total_is_clamped() {
        let usage = MemoryUsage::from_bytes(100 * MB, 200 * MB);
        assert_eq!(usage.used_mb, 0);
        assert_eq!(usage.free_mb, 100);
        assert_eq!(usage.load_pct, 0);
    }

    #[test]
    fn test_temperature() {
        assert_eq!(format_temperature(45.123, 0), "TEM 45C Sun");
        assert_eq!(format_temperature(7.9, 6), "TEM 07C Sat");
        assert_eq!(format_temperature(TEMPERATURE_SENTINEL, 3), "TEM -1C Wed");
    }

    #[test]
    fn test_temperature_rejects_bad_weekday() {
        assert_eq!(format_temperature(45.0, 7), "TEM 45C ???");
        assert_eq!(format_temperature(45.0, u32::MAX), "TEM 45C ???");
    }

    #[test]
    fn test_temperature_extremes_stay_in_width() {
        let text = format_temperature(f64::MAX, 1);
        assert!(text.len() <= FIELD_WIDTH);
        assert!(text.as_str().starts_with("TEM 9223372036"));

        assert_eq!(format_temperature(f64::NAN, 1), "TEM 00C Mon");
    }

    #[test]
    fn test_time_is_unpadded() {
        let clock = ClockReading {
            day: 7,
            hour: 9,
            minute: 5,
            second: 3,
            weekday: 0,
        };
        assert_eq!(format_time(&clock), "7 9:5:3");
    }

    #[test]
    fn test_address() {
        assert_eq!(
            format_address(Some(Ipv4Addr::new(192, 168, 1, 42))),
            "192.168.1.42"
        );
        assert_eq!(format_address(Some(Ipv4Addr::new(255, 255, 255, 255))).len(), 15);
        assert!(format_address(None).is_empty());
    }

    #[test]
    fn test_frame_layout() {
        let frame = format_frame(&sample_snapshot()).unwrap();
        let lines: Vec<(u8, u8, &str)> = frame
            .lines()
            .iter()
            .map(|l| (l.x, l.y, l.text.as_str()))
            .collect();

        assert_eq!(
            lines,
            vec![
                (0, 0, "Up 62 min"),
                (0, 8, "CPU 12%"),
                (0, 16, "RAM 474M 50"),
                (0, 24, "TEM 45C Tue"),
                (0, 32, "7 9:5:3"),
                (0, 40, "192.168.1.42"),
            ]
        );
    }

    #[test]
    fn test_failed_address_only_blanks_its_own_line() {
        let good = format_frame(&sample_snapshot()).unwrap();
        let degraded = format_frame(&Snapshot {
            address: None,
            ..sample_snapshot()
        })
        .unwrap();

        for slot in FieldSlot::ALL {
            let row = slot.row();
            if slot == FieldSlot::Address {
                assert_eq!(degraded.text_at_row(row), Some(""));
            } else {
                assert_eq!(degraded.text_at_row(row), good.text_at_row(row));
            }
        }
    }

    #[test]
    fn test_same_snapshot_same_frame() {
        let snapshot = sample_snapshot();
        assert_eq!(
            format_frame(&snapshot).unwrap(),
            format_frame(&snapshot).unwrap()
        );
    }

    #[test]
    fn test_degraded_snapshot_still_formats() {
        let frame = format_frame(&Snapshot::default()).unwrap();
        assert_eq!(frame.len(), FieldSlot::ALL.len());
        assert_eq!(frame.text_at_row(FieldSlot::Temperature.row()), Some("TEM -1C Thu"));
    }

    proptest! {
        #[test]
        fn prop_memory_adds_up(total in 0u64..(1u64 << 44), free_share in 0.0f64..=1.0) {
            let free = (total as f64 * free_share) as u64;
            let usage = MemoryUsage::from_bytes(total, free);
            prop_assert_eq!(usage.used_mb + usage.free_mb, usage.total_mb);
            prop_assert!(usage.load_pct <= 100);
        }

        #[test]
        fn prop_fields_fit(uptime in any::<u64>(), load in any::<u64>(), total in any::<u64>(), free in any::<u64>()) {
            prop_assert!(format_uptime(uptime).len() <= FIELD_WIDTH);
            prop_assert!(format_load(&[load, 0, 0]).len() <= FIELD_WIDTH);
            prop_assert!(format_memory(total, free).len() <= FIELD_WIDTH);
        }
    }
}
