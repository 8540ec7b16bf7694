//! Current date/time readout shown in the page header.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How often the readout is redrawn.
pub const CLOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `2025/07/05 09:05`
    #[default]
    Numeric,
    /// `2025年7月5日 9:05`
    Japanese,
}

pub fn format_clock(now: &NaiveDateTime, style: ClockStyle) -> String {
    match style {
        ClockStyle::Numeric => now.format("%Y/%m/%d %H:%M").to_string(),
        ClockStyle::Japanese => format!(
            "{}年{}月{}日 {}:{:02}",
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 5)
            .unwrap()
            .and_hms_opt(h, m, 59)
            .unwrap()
    }

    #[test]
    fn test_numeric_is_zero_padded() {
        assert_eq!(format_clock(&at(9, 5), ClockStyle::Numeric), "2025/07/05 09:05");
        assert_eq!(format_clock(&at(23, 59), ClockStyle::Numeric), "2025/07/05 23:59");
    }

    #[test]
    fn test_japanese_pads_minutes_only() {
        assert_eq!(format_clock(&at(9, 5), ClockStyle::Japanese), "2025年7月5日 9:05");
        assert_eq!(format_clock(&at(14, 30), ClockStyle::Japanese), "2025年7月5日 14:30");
    }
}
