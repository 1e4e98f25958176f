//! Session setup and initialization

use crate::data::{Dataset, DatasetError};
use crate::pretty::print_cmd_info;
use crate::query::{DateBounds, DateRange, RangeError};
use chrono::NaiveDate;
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The loaded dataset, read-only from here on
    pub dataset: Arc<Dataset>,
    /// Where the dataset was read from (for display purposes)
    pub data_path: PathBuf,
}

/// Loads the dataset every mode works on.
///
/// # Errors
/// Any [`DatasetError`] is fatal: the dashboard cannot start without data.
pub fn setup_session(data_path: &Path) -> Result<SessionData, DatasetError> {
    let dataset = Dataset::load(data_path)?;
    Ok(SessionData {
        dataset: Arc::new(dataset),
        data_path: data_path.to_path_buf(),
    })
}

/// Builds the initial selection from optional `--start` / `--end` values.
///
/// Missing ends default to the dataset bounds. Each given date is clamped
/// into the bounds first, the way the date picker limits its input; only
/// then is an inverted range rejected.
pub fn resolve_range(
    bounds: DateBounds,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DateRange, RangeError> {
    let start = clamp_flag(bounds, "--start", start.unwrap_or(bounds.min_date));
    let end = clamp_flag(bounds, "--end", end.unwrap_or(bounds.max_date));
    DateRange::new(start, end)
}

fn clamp_flag(bounds: DateBounds, flag: &str, date: NaiveDate) -> NaiveDate {
    if bounds.contains(date) {
        return date;
    }
    let clamped = bounds.clamp_date(date);
    warn!("{} {} clamped to {}", flag, date, clamped);
    print_cmd_info!(
        "Range clamped",
        "The dataset covers {} to {}; {} {} becomes {}.",
        bounds.min_date,
        bounds.max_date,
        flag,
        date,
        clamped
    );
    clamped
}
