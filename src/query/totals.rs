//! Scalar totals shown in the metrics panel

use super::aggregate::HourlyAggregate;
use serde::Serialize;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RentalTotals {
    /// "Total casual"
    pub casual: u64,
    /// "Total registered"
    pub registered: u64,
    /// "Total rent"
    pub total: u64,
}

impl RentalTotals {
    /// Sums the hourly aggregate. An empty aggregate gives all zeros.
    pub fn from_hourly(hourly: &[HourlyAggregate]) -> Self {
        hourly.iter().fold(Self::default(), |acc, row| Self {
            casual: acc.casual + row.casual_count,
            registered: acc.registered + row.registered_count,
            total: acc.total + row.total_count,
        })
    }
}
