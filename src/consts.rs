pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard client,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between operations and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// Connection timeout for API requests (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout (seconds). Training runs server-side for a
        /// couple of seconds, so this is looser than the connect timeout.
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI TIMING CONFIGURATION
    // =============================================================================

    pub mod ui_timing {
        use std::time::Duration;

        /// How long the F1 slot stays highlighted after fresh metrics land (milliseconds).
        pub const METRIC_HIGHLIGHT_MS: u64 = 500;

        /// Delay before metrics are re-fetched after a successful training run (milliseconds).
        pub const POST_TRAINING_RELOAD_MS: u64 = 1000;

        /// Key polling interval for the UI loop (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// How long the splash screen is shown before auto-advancing.
        pub const SPLASH_DURATION_MS: u64 = 1500;

        pub const fn metric_highlight() -> Duration {
            Duration::from_millis(METRIC_HIGHLIGHT_MS)
        }

        pub const fn post_training_reload() -> Duration {
            Duration::from_millis(POST_TRAINING_RELOAD_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }
    }

    // =============================================================================
    // TRAINING CONTROLS
    // =============================================================================

    pub mod controls {
        /// Idle label on the train trigger.
        pub const TRAIN_TRIGGER_LABEL: &str = "Train Model";

        /// Label shown while a training request is in flight.
        pub const TRAIN_TRIGGER_BUSY_LABEL: &str = "Training...";

        /// Regularization slider range and step.
        pub const C_MIN: f64 = 0.1;
        pub const C_MAX: f64 = 10.0;
        pub const C_STEP: f64 = 0.1;
        pub const C_DEFAULT: f64 = 1.0;
    }
}
