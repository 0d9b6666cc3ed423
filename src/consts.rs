pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the briefing
    //! dashboard, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the worker update channel.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    /// Maximum buffer size for the UI command channel.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // FETCH CONFIGURATION
    // =============================================================================

    /// Lookback window, in days, for source-filtered historical news.
    pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

    /// Fallback weather location when nothing is configured.
    pub const DEFAULT_CITY: &str = "Auckland";
    pub const DEFAULT_COUNTRY: &str = "NZ";

    /// Fallback crypto watch list and target currency.
    pub const DEFAULT_COINS: &str = "bitcoin,ethereum";
    pub const DEFAULT_CURRENCY: &str = "nzd";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    use std::time::Duration;

    /// How long the UI loop blocks waiting for a key event per frame (milliseconds).
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;

    /// Helper function to get the key poll interval
    pub const fn key_poll_interval() -> Duration {
        Duration::from_millis(KEY_POLL_INTERVAL_MS)
    }
}
