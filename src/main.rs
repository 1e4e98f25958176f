mod config;
mod consts;
mod data;
mod logging;
mod pretty;
mod query;
mod session;
mod ui;

use crate::config::Config;
use crate::logging::{ActivityLog, LogSink, init_logging};
use crate::pretty::{print_cmd_error, print_friendly_error_header};
use crate::session::{
    OutputFormat, resolve_range, run_headless_mode, run_tui_mode, setup_session,
};
use chrono::NaiveDate;
use clap::Parser;
use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Interactive bike-sharing rental dashboard
struct Args {
    /// Path to the cleaned hourly rentals CSV (defaults to main_data.csv)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// JSON configuration file with default settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a report for the selected range instead of starting the TUI
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Report format used in headless mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// First day of the selected range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start: Option<NaiveDate>,

    /// Last day of the selected range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    end: Option<NaiveDate>,

    /// Disable background colors
    #[arg(long = "no-background", default_value_t = false)]
    no_background: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path).map_err(|e| {
            print_cmd_error!("Failed to read configuration.", "{}", e);
            e
        })?,
        None => Config::default(),
    };

    let activity_log: ActivityLog = Arc::new(Mutex::new(VecDeque::new()));
    let sink = if args.headless {
        LogSink::Stderr
    } else {
        LogSink::Activity(activity_log.clone())
    };
    init_logging(sink)?;

    let data_path = config.resolve_data_path(args.data);
    let session = setup_session(&data_path).map_err(|e| {
        print_friendly_error_header();
        print_cmd_error!("Failed to load dataset.", "{}", e);
        e
    })?;

    let range = resolve_range(session.dataset.bounds(), args.start, args.end).map_err(|e| {
        print_cmd_error!("Invalid date range.", "{}", e);
        e
    })?;

    if args.headless {
        run_headless_mode(&session, range, args.format)
    } else {
        let with_background = config.resolve_background(args.no_background);
        run_tui_mode(session, range, activity_log, with_background)
    }
}
