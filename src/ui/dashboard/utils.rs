//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::logging::LogLevel;
use crate::query::aggregate::HourlyAggregate;
use ratatui::prelude::Color;

/// Get a ratatui color for a log level
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Trace | LogLevel::Debug => Color::DarkGray,
        LogLevel::Info => Color::Cyan,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Group digits in threes: 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// X-axis bounds and labels for the hourly chart.
///
/// `Axis` spreads its labels evenly, so the labels cover every integer hour
/// from the first hour present to the last, including hours without data.
/// A lone hour is widened by one neighbouring hour.
pub fn hour_axis(hourly: &[HourlyAggregate]) -> ([f64; 2], Vec<String>) {
    let first = hourly.iter().map(|r| r.hour).min().unwrap_or(0);
    let last = hourly.iter().map(|r| r.hour).max().unwrap_or(23);

    // A lone hour still needs a span to draw against
    let (first, last) = if first == last {
        match first {
            0 => (0, 1),
            23 => (22, 23),
            h => (h - 1, h + 1),
        }
    } else {
        (first, last)
    };

    let labels = (first..=last).map(|h| h.to_string()).collect();
    ([first as f64, last as f64], labels)
}

/// Upper bound for a count axis, leaving some headroom above the peak.
pub fn count_axis_max(peak: u64) -> f64 {
    if peak == 0 {
        1.0
    } else {
        (peak + peak.div_ceil(10)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u8) -> HourlyAggregate {
        HourlyAggregate {
            hour: h,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_count_groups_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-05-06 07:08:09"), "05-06 07:08");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_hour_axis_labels_every_hour() {
        let hourly: Vec<HourlyAggregate> = (0..24).map(hour).collect();
        let (bounds, labels) = hour_axis(&hourly);
        assert_eq!(bounds, [0.0, 23.0]);
        assert_eq!(labels.len(), 24);
        assert_eq!(labels.first().unwrap(), "0");
        assert_eq!(labels.last().unwrap(), "23");
    }

    #[test]
    fn test_hour_axis_widens_single_hour() {
        let (bounds, labels) = hour_axis(&[hour(0)]);
        assert_eq!(bounds, [0.0, 1.0]);
        assert_eq!(labels, vec!["0", "1"]);

        let (bounds, _) = hour_axis(&[hour(23)]);
        assert_eq!(bounds, [22.0, 23.0]);
    }

    #[test]
    fn test_count_axis_max() {
        assert_eq!(count_axis_max(0), 1.0);
        assert_eq!(count_axis_max(100), 110.0);
        assert_eq!(count_axis_max(7), 8.0);
    }
}
