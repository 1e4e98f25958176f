//! Dashboard state update logic
//!
//! Turns key presses into picker moves and picker moves into a fresh
//! snapshot.

use super::picker::PickerField;
use super::state::DashboardState;
use crate::consts::cli_consts::PICKER_PAGE_DAYS;
use crate::query::{DashboardSnapshot, DateRange};

use crossterm::event::KeyCode;
use log::{debug, info};

impl DashboardState {
    /// Handle a key press on the dashboard screen.
    pub fn handle_key(&mut self, code: KeyCode) {
        let changed = match code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.picker.toggle_focus();
                None
            }
            KeyCode::Left => {
                self.picker.set_focus(PickerField::Start);
                None
            }
            KeyCode::Right => {
                self.picker.set_focus(PickerField::End);
                None
            }
            KeyCode::Up | KeyCode::Char('+') => self.picker.shift(1),
            KeyCode::Down | KeyCode::Char('-') => self.picker.shift(-1),
            KeyCode::PageUp => self.picker.shift(PICKER_PAGE_DAYS),
            KeyCode::PageDown => self.picker.shift(-PICKER_PAGE_DAYS),
            KeyCode::Home => self.picker.jump_to_lower_limit(),
            KeyCode::End => self.picker.jump_to_upper_limit(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.picker.reset(),
            _ => None,
        };

        if let Some(range) = changed {
            self.on_date_range_changed(range);
        }
    }

    /// Recompute filter, aggregates and totals for `range`.
    ///
    /// The next frame renders the new snapshot; nothing else is cached.
    pub fn on_date_range_changed(&mut self, range: DateRange) {
        let snapshot = DashboardSnapshot::compute(&self.dataset, range);
        if snapshot.is_empty() {
            info!(
                "No rentals between {} and {}",
                range.start(),
                range.end()
            );
        } else {
            debug!(
                "Range {} to {}: {} records, {} rentals",
                range.start(),
                range.end(),
                snapshot.record_count,
                snapshot.totals.total
            );
        }
        self.set_snapshot(snapshot);
    }
}
