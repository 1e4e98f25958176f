//! Date bounds and the user-selected date range

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// The start of the range lies after its end.
    #[error("Start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Earliest and latest dates observed in the dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DateBounds {
    /// The range covering the whole dataset; the selector's default value.
    pub fn full_range(&self) -> DateRange {
        DateRange {
            start: self.min_date,
            end: self.max_date,
        }
    }

    /// Moves `date` onto the nearest bound if it lies outside them.
    pub fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min_date, self.max_date)
    }

    /// Clamps both ends of `range` into the bounds.
    pub fn clamp(&self, range: DateRange) -> DateRange {
        DateRange {
            start: self.clamp_date(range.start),
            end: self.clamp_date(range.end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

/// Inclusive `[start, end]` date selection. `start <= end` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end` instead of silently
    /// selecting nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
