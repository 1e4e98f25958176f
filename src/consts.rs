pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed values the dashboard relies on,
    //! organized by functional area.

    // =============================================================================
    // DATA SOURCE
    // =============================================================================

    /// Dataset file read when neither `--data` nor a config file names one.
    /// Resolved relative to the working directory.
    pub const DEFAULT_DATA_PATH: &str = "main_data.csv";

    /// Columns the loader requires to be present in the CSV header.
    pub const REQUIRED_COLUMNS: [&str; 7] = [
        "dteday",
        "hr",
        "hr_group",
        "season",
        "casual",
        "registered",
        "cnt",
    ];

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of log records to keep in the activity panel.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the splash screen stays up before the dashboard appears (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Key event poll interval for the UI loop (milliseconds)
    pub const EVENT_POLL_INTERVAL_MS: u64 = 100;

    /// Number of days `PgUp` / `PgDn` move the focused date.
    pub const PICKER_PAGE_DAYS: i64 = 7;

    // =============================================================================
    // CHART COLOURS
    // =============================================================================

    /// Chart palette
    pub mod palette {
        /// Hourly line series (#90CAF9)
        pub const HOURLY_LINE: (u8, u8, u8) = (0x90, 0xCA, 0xF9);
        /// Midday bar (#FF9999)
        pub const MIDDAY: (u8, u8, u8) = (0xFF, 0x99, 0x99);
        /// Morning bar (#72BCD4)
        pub const MORNING: (u8, u8, u8) = (0x72, 0xBC, 0xD4);
        /// Night bar (#FFD700)
        pub const NIGHT: (u8, u8, u8) = (0xFF, 0xD7, 0x00);
        /// Season bars
        pub const SEASON: (u8, u8, u8) = (0x72, 0xBC, 0xD4);
        /// Dashboard background when background colours are enabled
        pub const BACKGROUND: (u8, u8, u8) = (16, 20, 24);
    }
}
