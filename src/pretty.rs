use crate::ui::splash::LOGO_NAME;

// Banners go to stderr so headless reports on stdout stay parseable.
macro_rules! print_cmd_error {
    ($tt:tt) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        eprintln!("\x1b[1;31m[ERROR!!!]\x1b[0m Start details...");
        eprintln!("{}", core::format_args!($($tts)*));
        eprintln!("\x1b[1;31m[ERROR!!!]\x1b[0m End details.\n");
    }
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        eprintln!("\x1b[1;33m[INFO!!!] {}\x1b[0m", $tt);
        eprintln!("{}", core::format_args!($($tts)*));
    }
}

/// Shown above dataset load failures, which are always fatal.
pub(crate) fn print_friendly_error_header() {
    // RGB: FF = 255, AA = 170, 00 = 0
    eprintln!("\x1b[38;2;255;170;0m{}\x1b[0m", LOGO_NAME);
    eprintln!("\x1b[38;2;255;170;0mThe dashboard could not start.\x1b[0m");
    eprintln!(
        "The rental dataset must be a cleaned CSV with the columns dteday, hr, hr_group, season, casual, registered and cnt. Pass its location with `--data` or run from the directory holding main_data.csv.\n"
    );
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
