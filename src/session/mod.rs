//! Session management for TUI and headless modes

pub mod headless_mode;
pub mod messages;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{OutputFormat, run_headless_mode};
pub use setup::{SessionData, resolve_range, setup_session};
pub use tui_mode::run_tui_mode;
