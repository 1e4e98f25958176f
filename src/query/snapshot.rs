//! One full recomputation pass: filter, aggregate, total.

use super::aggregate::{
    HourGroupAggregate, HourlyAggregate, SeasonAggregate, aggregate_by_hour,
    aggregate_by_hour_group, aggregate_by_season,
};
use super::filter::filter_by_date_range;
use super::range::DateRange;
use super::totals::RentalTotals;
use crate::data::Dataset;
use serde::Serialize;

/// Everything the dashboard shows for one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    /// Number of records inside the range.
    pub record_count: usize,
    pub totals: RentalTotals,
    pub hourly: Vec<HourlyAggregate>,
    pub hour_groups: Vec<HourGroupAggregate>,
    pub seasons: Vec<SeasonAggregate>,
}

impl DashboardSnapshot {
    pub fn compute(dataset: &Dataset, range: DateRange) -> Self {
        let selected = filter_by_date_range(dataset, &range);

        let hourly = aggregate_by_hour(selected.iter().copied());
        let hour_groups = aggregate_by_hour_group(selected.iter().copied());
        let seasons = aggregate_by_season(selected.iter().copied());
        let totals = RentalTotals::from_hourly(&hourly);

        Self {
            range,
            record_count: selected.len(),
            totals,
            hourly,
            hour_groups,
            seasons,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
