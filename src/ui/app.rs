//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{EVENT_POLL_INTERVAL_MS, SPLASH_DURATION_MS};
use crate::data::Dataset;
use crate::logging::ActivityLog;
use crate::query::DateRange;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use log::info;
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the date picker, metrics and charts.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The loaded dataset, shared read-only with the dashboard.
    dataset: Arc<Dataset>,

    /// Range the dashboard opens with.
    initial_range: DateRange,

    /// Log records captured while the TUI owns the terminal.
    activity_log: ActivityLog,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        dataset: Arc<Dataset>,
        initial_range: DateRange,
        activity_log: ActivityLog,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            dataset,
            initial_range,
            activity_log,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Leaves the splash screen for the dashboard.
    fn open_dashboard(&mut self) {
        let state = DashboardState::new(
            self.dataset.clone(),
            self.initial_range,
            self.activity_log.clone(),
            self.ui_config.clone(),
        );
        info!(
            "Showing {} to {}",
            self.initial_range.start(),
            self.initial_range.end()
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                // Any key press will skip the splash screen
                if matches!(app.current_screen, Screen::Splash) {
                    app.open_dashboard();
                } else if let Screen::Dashboard(state) = &mut app.current_screen {
                    state.handle_key(key.code);
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f, &app.dataset),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
