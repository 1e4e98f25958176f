//! Group-by aggregations over a record selection
//!
//! Each function is pure: it takes any iterator of records (usually the
//! output of [`super::filter::filter_by_date_range`]) and returns one row per
//! distinct key present, in ascending key order. No rows in, no rows out.

use crate::data::{HourGroup, RentalRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rentals summed per hour of day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HourlyAggregate {
    pub hour: u8,
    pub casual_count: u64,
    pub registered_count: u64,
    pub total_count: u64,
}

/// Total rentals per hour group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourGroupAggregate {
    pub hour_group: HourGroup,
    pub total_count: u64,
}

/// Total rentals per season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonAggregate {
    pub season: String,
    pub total_count: u64,
}

/// Groups by `hour`, summing all three counts. Ordered by hour ascending.
pub fn aggregate_by_hour<'a, I>(records: I) -> Vec<HourlyAggregate>
where
    I: IntoIterator<Item = &'a RentalRecord>,
{
    let mut by_hour: BTreeMap<u8, HourlyAggregate> = BTreeMap::new();
    for record in records {
        let row = by_hour.entry(record.hour).or_insert_with(|| HourlyAggregate {
            hour: record.hour,
            ..Default::default()
        });
        row.casual_count += record.casual_count;
        row.registered_count += record.registered_count;
        row.total_count += record.total_count;
    }
    by_hour.into_values().collect()
}

/// Groups by `hour_group`, summing `total_count`.
pub fn aggregate_by_hour_group<'a, I>(records: I) -> Vec<HourGroupAggregate>
where
    I: IntoIterator<Item = &'a RentalRecord>,
{
    let mut by_group: BTreeMap<HourGroup, u64> = BTreeMap::new();
    for record in records {
        *by_group.entry(record.hour_group).or_default() += record.total_count;
    }
    by_group
        .into_iter()
        .map(|(hour_group, total_count)| HourGroupAggregate {
            hour_group,
            total_count,
        })
        .collect()
}

/// Groups by `season`, summing `total_count`.
pub fn aggregate_by_season<'a, I>(records: I) -> Vec<SeasonAggregate>
where
    I: IntoIterator<Item = &'a RentalRecord>,
{
    let mut by_season: BTreeMap<&'a str, u64> = BTreeMap::new();
    for record in records {
        *by_season.entry(record.season.as_str()).or_default() += record.total_count;
    }
    by_season
        .into_iter()
        .map(|(season, total_count)| SeasonAggregate {
            season: season.to_string(),
            total_count,
        })
        .collect()
}
