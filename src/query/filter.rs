//! Date filter

use super::range::DateRange;
use crate::data::{Dataset, RentalRecord};

/// Returns the records observed within `range`, both ends inclusive, in
/// dataset order. An empty selection is a valid result.
pub fn filter_by_date_range<'a>(dataset: &'a Dataset, range: &DateRange) -> Vec<&'a RentalRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HourGroup;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn record(day: u32, hour: u8, total: u64) -> RentalRecord {
        RentalRecord {
            date: date(day),
            hour,
            hour_group: HourGroup::Night,
            season: "Spring".to_string(),
            casual_count: 1,
            registered_count: total - 1,
            total_count: total,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1, 0, 10),
            record(1, 1, 20),
            record(2, 0, 30),
            record(3, 0, 40),
            record(3, 1, 50),
        ])
        .unwrap()
    }

    #[test]
    // A single-day range selects exactly the rows of that day.
    fn test_single_day_selects_that_day() {
        let dataset = dataset();
        let selected = filter_by_date_range(&dataset, &DateRange::single_day(date(3)));
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.date == date(3)));
    }

    #[test]
    fn test_full_bounds_select_everything() {
        let dataset = dataset();
        let selected = filter_by_date_range(&dataset, &dataset.bounds().full_range());
        assert_eq!(selected.len(), dataset.len());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let dataset = dataset();
        let range = DateRange::new(date(2), date(3)).unwrap();
        let totals: Vec<u64> = filter_by_date_range(&dataset, &range)
            .iter()
            .map(|r| r.total_count)
            .collect();
        assert_eq!(totals, vec![30, 40, 50]);
    }

    #[test]
    fn test_range_without_rows_is_empty() {
        let dataset = dataset();
        let range = DateRange::new(date(10), date(12)).unwrap();
        assert!(filter_by_date_range(&dataset, &range).is_empty());
    }
}
