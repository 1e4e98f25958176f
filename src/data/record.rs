//! Rental record types

use crate::consts::cli_consts::palette;
use chrono::NaiveDate;
use serde::Serialize;

/// Coarse hour-of-day bucket carried by every row of the dataset.
///
/// Variants are declared in label order so that sorting groups matches
/// sorting their names.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum HourGroup {
    Midday,
    Morning,
    Night,
}

impl HourGroup {
    /// Clock window the group covers, as shown in the chart legend.
    pub fn window_label(&self) -> &'static str {
        match self {
            HourGroup::Midday => "11:00 - 17:00",
            HourGroup::Morning => "03:00 - 10:00",
            HourGroup::Night => "18:00 - 02:00",
        }
    }

    /// Fixed bar colour as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            HourGroup::Midday => palette::MIDDAY,
            HourGroup::Morning => palette::MORNING,
            HourGroup::Night => palette::NIGHT,
        }
    }

    /// Whether `hour` falls inside this group's window.
    pub fn contains_hour(&self, hour: u8) -> bool {
        match self {
            HourGroup::Midday => (11..=17).contains(&hour),
            HourGroup::Morning => (3..=10).contains(&hour),
            HourGroup::Night => hour >= 18 || hour <= 2,
        }
    }
}

/// One row of the bike-sharing dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalRecord {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u8,
    pub hour_group: HourGroup,
    /// Season identifier as written in the source file.
    pub season: String,
    pub casual_count: u64,
    pub registered_count: u64,
    /// Always `casual_count + registered_count`.
    pub total_count: u64,
}
