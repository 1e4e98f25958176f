//! Dashboard state management
//!
//! Holds the dataset handle, the picker and the snapshot currently on screen.

use super::picker::DateRangePicker;
use crate::data::Dataset;
use crate::logging::ActivityLog;
use crate::query::{DashboardSnapshot, DateRange};
use crate::ui::app::UIConfig;

use std::sync::Arc;

#[derive(Debug)]
pub struct DashboardState {
    /// Read-only dataset shared with the rest of the session.
    pub dataset: Arc<Dataset>,
    /// Date range selector shown in the sidebar.
    pub picker: DateRangePicker,
    /// Log records written by the logger, newest last.
    pub activity_log: ActivityLog,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Result of the last recomputation; what every component draws.
    snapshot: DashboardSnapshot,
    /// Number of recomputations since start-up, the initial one included.
    recompute_count: usize,
}

impl DashboardState {
    /// Creates the dashboard and computes its first snapshot.
    pub fn new(
        dataset: Arc<Dataset>,
        initial_range: DateRange,
        activity_log: ActivityLog,
        ui_config: UIConfig,
    ) -> Self {
        let picker = DateRangePicker::new(dataset.bounds(), initial_range);
        let snapshot = DashboardSnapshot::compute(&dataset, picker.range());
        Self {
            dataset,
            picker,
            activity_log,
            with_background_color: ui_config.with_background_color,
            snapshot,
            recompute_count: 1,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn recompute_count(&self) -> usize {
        self.recompute_count
    }

    // Setter for the updaters
    pub(super) fn set_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.snapshot = snapshot;
        self.recompute_count += 1;
    }
}
