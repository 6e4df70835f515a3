//! Weekday abbreviations

/// Three-letter day names, indexed by days since Sunday
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Abbreviation for a weekday index, `None` outside `0..=6`
pub fn weekday_abbrev(index: u32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| WEEKDAY_ABBREVIATIONS.get(i))
        .copied()
}
