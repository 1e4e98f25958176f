//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::logging::ActivityLog;
use crate::query::DateRange;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Restoring the terminal even when the UI loop fails
///
/// # Arguments
/// * `session` - Session data from setup
/// * `initial_range` - Date range the dashboard opens with
/// * `activity_log` - Buffer the logger writes into while the TUI runs
/// * `with_background` - Whether to enable background colors
pub fn run_tui_mode(
    session: SessionData,
    initial_range: DateRange,
    activity_log: ActivityLog,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.data_path, session.dataset.len());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.dataset,
        initial_range,
        activity_log,
        UIConfig::new(with_background),
    );

    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_session_exit_success();

    Ok(())
}
