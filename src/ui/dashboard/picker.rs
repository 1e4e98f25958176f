//! Date range picker
//!
//! Keyboard-driven replacement for a calendar widget. The picker can only
//! hold ranges inside the dataset bounds with `start <= end`.

use crate::query::{DateBounds, DateRange};
use chrono::{NaiveDate, TimeDelta};

/// Which end of the range the arrow keys move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickerField {
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct DateRangePicker {
    bounds: DateBounds,
    range: DateRange,
    focus: PickerField,
}

impl DateRangePicker {
    /// Creates a picker over `bounds`, selecting `initial` clamped into them.
    pub fn new(bounds: DateBounds, initial: DateRange) -> Self {
        Self {
            bounds,
            range: bounds.clamp(initial),
            focus: PickerField::Start,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn focus(&self) -> PickerField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: PickerField) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerField::Start => PickerField::End,
            PickerField::End => PickerField::Start,
        };
    }

    /// Moves the focused date by `days`, stopping at its limit.
    /// Returns the new range if anything moved.
    pub fn shift(&mut self, days: i64) -> Option<DateRange> {
        let current = self.focused_date();
        let (lower, upper) = self.limits();
        let target = current
            .checked_add_signed(TimeDelta::days(days))
            .unwrap_or(if days < 0 { lower } else { upper });
        self.set_focused_date(target)
    }

    /// Moves the focused date to the earliest date it may take.
    pub fn jump_to_lower_limit(&mut self) -> Option<DateRange> {
        let (lower, _) = self.limits();
        self.set_focused_date(lower)
    }

    /// Moves the focused date to the latest date it may take.
    pub fn jump_to_upper_limit(&mut self) -> Option<DateRange> {
        let (_, upper) = self.limits();
        self.set_focused_date(upper)
    }

    /// Selects the whole dataset again.
    pub fn reset(&mut self) -> Option<DateRange> {
        self.replace(self.bounds.full_range())
    }

    fn focused_date(&self) -> NaiveDate {
        match self.focus {
            PickerField::Start => self.range.start(),
            PickerField::End => self.range.end(),
        }
    }

    /// Start may not pass the end, and the end may not precede the start.
    fn limits(&self) -> (NaiveDate, NaiveDate) {
        match self.focus {
            PickerField::Start => (self.bounds.min_date, self.range.end()),
            PickerField::End => (self.range.start(), self.bounds.max_date),
        }
    }

    fn set_focused_date(&mut self, date: NaiveDate) -> Option<DateRange> {
        let (lower, upper) = self.limits();
        let date = date.clamp(lower, upper);
        let candidate = match self.focus {
            PickerField::Start => DateRange::new(date, self.range.end()),
            PickerField::End => DateRange::new(self.range.start(), date),
        }
        .ok()?;
        self.replace(candidate)
    }

    fn replace(&mut self, range: DateRange) -> Option<DateRange> {
        if range == self.range {
            return None;
        }
        self.range = range;
        Some(range)
    }
}
