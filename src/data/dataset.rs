//! Immutable in-memory dataset

use super::error::DatasetError;
use super::record::RentalRecord;
use crate::query::DateBounds;
use std::path::Path;

/// The full rental dataset, read-only after loading.
///
/// Every query receives the dataset explicitly; nothing holds it globally.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    bounds: DateBounds,
}

// Never empty, so `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl Dataset {
    /// Reads the dataset from a CSV file. See [`super::loader::load_dataset`].
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        super::loader::load_dataset(path)
    }

    /// Builds a dataset from already-validated records.
    ///
    /// # Errors
    /// Returns [`DatasetError::Empty`] when `records` is empty, since an empty
    /// dataset has no date bounds to select from.
    pub fn from_records(records: Vec<RentalRecord>) -> Result<Self, DatasetError> {
        let min_date = records.iter().map(|r| r.date).min();
        let max_date = records.iter().map(|r| r.date).max();
        match (min_date, max_date) {
            (Some(min_date), Some(max_date)) => Ok(Self {
                records,
                bounds: DateBounds { min_date, max_date },
            }),
            _ => Err(DatasetError::Empty),
        }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Earliest and latest observed dates.
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
