//! CSV loading
//!
//! Reads the cleaned rental dataset with polars, casts every required column
//! to the type the dashboard expects and converts the frame into
//! [`RentalRecord`]s. Any malformed row aborts the load.

use super::dataset::Dataset;
use super::error::DatasetError;
use super::record::{HourGroup, RentalRecord};
use crate::consts::cli_consts::REQUIRED_COLUMNS;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::Path;
use std::str::FromStr;

/// Date-only layouts accepted in `dteday`.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
/// Timestamp layouts accepted in `dteday`; the time part is dropped.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Loads the dataset at `path`.
///
/// # Errors
/// Returns a [`DatasetError`] if the file cannot be opened, a required column
/// is missing, or any row holds a value that does not fit the record model.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    std::fs::metadata(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let frame = read_frame(path)?;
    let records = frame_to_records(&frame)?;
    let dataset = Dataset::from_records(records)?;

    let bounds = dataset.bounds();
    info!(
        "Loaded {} records from {} ({} to {})",
        dataset.len(),
        path.display(),
        bounds.min_date,
        bounds.max_date
    );
    Ok(dataset)
}

/// Parse the CSV and project the required columns with their expected types.
///
/// Every column is read as text, so columns the dashboard ignores can hold
/// anything. Required values that do not cast come out null and are
/// reported per row.
fn read_frame(path: &Path) -> Result<DataFrame, DatasetError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|name| name == required) {
            return Err(DatasetError::MissingColumn(required));
        }
    }
    debug!("CSV header: {}", column_names.join(", "));

    let df = df
        .lazy()
        .select([
            col("dteday").cast(DataType::String),
            col("hr").cast(DataType::Int64),
            col("hr_group").cast(DataType::String),
            col("season").cast(DataType::String),
            col("casual").cast(DataType::Int64),
            col("registered").cast(DataType::Int64),
            col("cnt").cast(DataType::Int64),
        ])
        .collect()?;

    Ok(df)
}

/// Convert the typed frame into records, validating each row.
fn frame_to_records(df: &DataFrame) -> Result<Vec<RentalRecord>, DatasetError> {
    let dates = df.column("dteday")?.str()?;
    let hours = df.column("hr")?.i64()?;
    let hour_groups = df.column("hr_group")?.str()?;
    let seasons = df.column("season")?.str()?;
    let casual = df.column("casual")?.i64()?;
    let registered = df.column("registered")?.i64()?;
    let totals = df.column("cnt")?.i64()?;

    let mut records = Vec::with_capacity(df.height());
    let mut mislabelled_rows = 0usize;

    for idx in 0..df.height() {
        // 1-based, counting data rows only
        let row = idx + 1;

        let raw_date = dates.get(idx).ok_or_else(|| missing(row, "dteday"))?;
        let date = parse_observation_date(raw_date).ok_or_else(|| DatasetError::MalformedDate {
            row,
            value: raw_date.to_string(),
        })?;

        let hour = hours.get(idx).ok_or_else(|| missing(row, "hr"))?;
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| DatasetError::MalformedValue {
                row,
                column: "hr",
                reason: format!("hour {} is outside 0-23", hour),
            })?;

        let raw_group = hour_groups.get(idx).ok_or_else(|| missing(row, "hr_group"))?;
        let hour_group =
            HourGroup::from_str(raw_group.trim()).map_err(|_| DatasetError::MalformedValue {
                row,
                column: "hr_group",
                reason: format!("unknown hour group {:?}", raw_group),
            })?;
        if !hour_group.contains_hour(hour) {
            mislabelled_rows += 1;
        }

        let season = seasons
            .get(idx)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| missing(row, "season"))?;

        let casual_count = count(casual.get(idx), row, "casual")?;
        let registered_count = count(registered.get(idx), row, "registered")?;
        let total_count = count(totals.get(idx), row, "cnt")?;
        if casual_count + registered_count != total_count {
            return Err(DatasetError::InconsistentCounts {
                row,
                casual: casual_count,
                registered: registered_count,
                total: total_count,
            });
        }

        records.push(RentalRecord {
            date,
            hour,
            hour_group,
            season,
            casual_count,
            registered_count,
            total_count,
        });
    }

    if mislabelled_rows > 0 {
        warn!(
            "{} rows carry an hour group that does not match their hour",
            mislabelled_rows
        );
    }

    Ok(records)
}

/// Parse a `dteday` value, accepting plain dates and full timestamps.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn count(value: Option<i64>, row: usize, column: &'static str) -> Result<u64, DatasetError> {
    let value = value.ok_or_else(|| missing(row, column))?;
    u64::try_from(value).map_err(|_| DatasetError::MalformedValue {
        row,
        column,
        reason: format!("count {} is negative", value),
    })
}

fn missing(row: usize, column: &'static str) -> DatasetError {
    DatasetError::MalformedValue {
        row,
        column,
        reason: "missing or non-numeric value".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const HEADER: &str = "dteday,season,hr,hr_group,casual,registered,cnt";

    fn write_csv(rows: &[&str]) -> (TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main_data.csv");
        let mut body = String::from(HEADER);
        for row in rows {
            body.push('\n');
            body.push_str(row);
        }
        body.push('\n');
        fs::write(&path, body).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_parses_rows() {
        let (_dir, path) = write_csv(&[
            "2011-01-01,Spring,0,Night,3,13,16",
            "2011-01-01,Spring,9,Morning,8,6,14",
            "2011-01-02,Spring,13,Midday,47,47,94",
        ]);

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.hour, 0);
        assert_eq!(first.hour_group, HourGroup::Night);
        assert_eq!(first.season, "Spring");
        assert_eq!(first.total_count, 16);

        let bounds = dataset.bounds();
        assert_eq!(bounds.min_date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(bounds.max_date, NaiveDate::from_ymd_opt(2011, 1, 2).unwrap());
    }

    #[test]
    // Numeric season codes are kept as their text form.
    fn test_load_accepts_numeric_seasons() {
        let (_dir, path) = write_csv(&["2011-01-01,1,0,Night,3,13,16"]);
        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.records()[0].season, "1");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = load_dataset(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_load_rejects_malformed_date() {
        let (_dir, path) = write_csv(&[
            "2011-01-01,Spring,0,Night,3,13,16",
            "not-a-date,Spring,1,Night,8,32,40",
        ]);
        match load_dataset(&path) {
            Err(DatasetError::MalformedDate { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected MalformedDate, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main_data.csv");
        fs::write(&path, "dteday,hr,casual,registered,cnt\n2011-01-01,0,3,13,16\n").unwrap();
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::MissingColumn("hr_group"))
        ));
    }

    #[test]
    fn test_load_rejects_hour_out_of_range() {
        let (_dir, path) = write_csv(&["2011-01-01,Spring,24,Night,3,13,16"]);
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::MalformedValue { column: "hr", .. })
        ));
    }

    #[test]
    fn test_load_rejects_unknown_hour_group() {
        let (_dir, path) = write_csv(&["2011-01-01,Spring,0,Evening,3,13,16"]);
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::MalformedValue {
                column: "hr_group",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_inconsistent_counts() {
        let (_dir, path) = write_csv(&["2011-01-01,Spring,0,Night,3,13,17"]);
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::InconsistentCounts { row: 1, .. })
        ));
    }

    #[test]
    fn test_load_rejects_negative_counts() {
        let (_dir, path) = write_csv(&["2011-01-01,Spring,0,Night,-3,19,16"]);
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::MalformedValue {
                column: "casual",
                ..
            })
        ));
    }

    #[test]
    // Columns outside the required set are never type-checked, even when
    // their values change shape deep into the file.
    fn test_load_ignores_late_floats_in_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main_data.csv");
        let mut body = format!("{},windspeed\n", HEADER);
        for i in 0..150 {
            let windspeed = if i < 120 { "0" } else { "0.2985" };
            body.push_str(&format!(
                "2011-01-01,Spring,{},Night,3,13,16,{}\n",
                if i % 2 == 0 { 0 } else { 20 },
                windspeed
            ));
        }
        fs::write(&path, body).unwrap();

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 150);
        assert!(dataset.records().iter().all(|r| r.total_count == 16));
    }

    #[test]
    fn test_load_rejects_non_numeric_count() {
        let (_dir, path) = write_csv(&[
            "2011-01-01,Spring,0,Night,3,13,16",
            "2011-01-01,Spring,1,Night,three,13,16",
        ]);
        assert!(matches!(
            load_dataset(&path),
            Err(DatasetError::MalformedValue {
                row: 2,
                column: "casual",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_header_only_file() {
        let (_dir, path) = write_csv(&[]);
        assert!(load_dataset(&path).is_err());
    }

    #[test]
    fn test_parse_observation_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2012, 12, 31);
        assert_eq!(parse_observation_date("2012-12-31"), expected);
        assert_eq!(parse_observation_date(" 2012-12-31 "), expected);
        assert_eq!(parse_observation_date("2012-12-31 00:00:00"), expected);
        assert_eq!(parse_observation_date("2012-12-31T23:00:00"), expected);
        assert_eq!(parse_observation_date("12/31/2012"), expected);
        assert_eq!(parse_observation_date("31.12.2012"), None);
    }
}
