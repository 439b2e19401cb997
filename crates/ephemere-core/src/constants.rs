/// Application name
pub const APP_NAME: &str = "Éphémère";

/// Progress value at which a story has played to completion (percent)
pub const PROGRESS_COMPLETE: u8 = 100;

/// Default playback timer interval in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Default progress increment per timer tick (percentage points)
pub const DEFAULT_TICK_STEP_PERCENT: u8 = 2;

/// Smallest accepted playback timer interval in milliseconds
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Default feed URL for local development
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8080/data.json";
