//! Headless mode execution
//!
//! Computes one snapshot for the requested range and prints it, either as a
//! plain-text report or as JSON.

use super::SessionData;
use crate::query::{DashboardSnapshot, DateRange};
use crate::ui::dashboard::utils::format_count;
use clap::ValueEnum;
use log::info;
use std::error::Error;
use std::fmt::Write;

/// Output format for headless reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runs the application in headless mode
///
/// # Arguments
/// * `session` - Session data from setup
/// * `range` - Range the report is computed for
/// * `format` - How the report is printed to stdout
pub fn run_headless_mode(
    session: &SessionData,
    range: DateRange,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    info!(
        "Computing report for {} to {} from {}",
        range.start(),
        range.end(),
        session.data_path.display()
    );

    let snapshot = DashboardSnapshot::compute(&session.dataset, range);
    if snapshot.is_empty() {
        info!("No records between {} and {}", range.start(), range.end());
    }

    match format {
        OutputFormat::Text => print!("{}", render_text_report(&snapshot)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    Ok(())
}

/// Renders the snapshot as the plain-text report printed by `--format text`.
pub fn render_text_report(snapshot: &DashboardSnapshot) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, snapshot)?;
    Ok(out)
}

fn write_report(out: &mut String, snapshot: &DashboardSnapshot) -> std::fmt::Result {
    writeln!(out, "Bike Sharing Dashboard")?;
    writeln!(
        out,
        "Range: {} to {} ({} days, {} records)",
        snapshot.range.start(),
        snapshot.range.end(),
        snapshot.range.num_days(),
        snapshot.record_count
    )?;
    writeln!(out)?;

    writeln!(out, "Hourly rent")?;
    writeln!(out, "  Total casual:     {:>12}", format_count(snapshot.totals.casual))?;
    writeln!(out, "  Total registered: {:>12}", format_count(snapshot.totals.registered))?;
    writeln!(out, "  Total rent:       {:>12}", format_count(snapshot.totals.total))?;
    writeln!(out)?;

    if snapshot.is_empty() {
        writeln!(out, "No data for the selected range")?;
        return Ok(());
    }

    writeln!(out, "  {:>4}  {:>10}  {:>10}  {:>10}", "Hour", "Casual", "Registered", "Total")?;
    for row in &snapshot.hourly {
        writeln!(
            out,
            "  {:>4}  {:>10}  {:>10}  {:>10}",
            format!("{:02}", row.hour),
            format_count(row.casual_count),
            format_count(row.registered_count),
            format_count(row.total_count)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Number of Rent by Hour Group")?;
    for group in &snapshot.hour_groups {
        writeln!(
            out,
            "  {:<8} {:<15} {:>10}",
            group.hour_group.to_string(),
            format!("({})", group.hour_group.window_label()),
            format_count(group.total_count)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Number of Rent by Season")?;
    for season in &snapshot.seasons {
        writeln!(out, "  {:<8} {:>10}", season.season, format_count(season.total_count))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, HourGroup, RentalRecord};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 3, d).unwrap()
    }

    fn dataset() -> Dataset {
        let rows = [
            (1, 7, HourGroup::Morning, 12, 1200),
            (1, 17, HourGroup::Midday, 40, 960),
            (4, 22, HourGroup::Night, 5, 95),
        ];
        let records = rows
            .iter()
            .map(|&(day, hour, hour_group, casual, registered)| RentalRecord {
                date: date(day),
                hour,
                hour_group,
                season: "Spring".to_string(),
                casual_count: casual,
                registered_count: registered,
                total_count: casual + registered,
            })
            .collect();
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn test_text_report_lists_every_section() {
        let dataset = dataset();
        let snapshot = DashboardSnapshot::compute(&dataset, dataset.bounds().full_range());
        let report = render_text_report(&snapshot).unwrap();

        assert!(report.contains("Range: 2012-03-01 to 2012-03-04 (4 days, 3 records)"));
        assert!(report.contains("Total casual:"));
        assert!(report.contains("2,312"));
        assert!(report.contains("Midday"));
        assert!(report.contains("(11:00 - 17:00)"));
        assert!(report.contains("(18:00 - 02:00)"));
        assert!(report.contains("Spring"));
        assert!(!report.contains("No data for the selected range"));
    }

    #[test]
    fn test_text_report_for_empty_range() {
        let dataset = dataset();
        let snapshot = DashboardSnapshot::compute(&dataset, DateRange::single_day(date(2)));
        let report = render_text_report(&snapshot).unwrap();

        assert!(report.contains("0 records"));
        assert!(report.contains("No data for the selected range"));
        assert!(!report.contains("Number of Rent by Season"));
    }

    #[test]
    fn test_json_report_matches_snapshot_fields() {
        let dataset = dataset();
        let snapshot = DashboardSnapshot::compute(&dataset, dataset.bounds().full_range());
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["record_count"], 3);
        assert_eq!(value["totals"]["total"], 2312);
        assert_eq!(value["hourly"].as_array().unwrap().len(), 3);
        assert_eq!(value["seasons"][0]["season"], "Spring");
    }
}
