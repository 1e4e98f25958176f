//! Session start and exit messages

use std::path::Path;

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

/// Printed before the TUI takes over the terminal.
pub fn print_session_starting(mode: &str, data_path: &Path, records: usize) {
    println!(
        "{}[INFO]{} Starting {} mode with {} records from {}",
        COLOR_INFO,
        COLOR_RESET,
        mode,
        records,
        data_path.display()
    );
}

/// Printed once the terminal has been restored.
pub fn print_session_exit_success() {
    println!(
        "{}[SUCCESS]{} Bike Sharing Dashboard exited successfully",
        COLOR_SUCCESS, COLOR_RESET
    );
}
