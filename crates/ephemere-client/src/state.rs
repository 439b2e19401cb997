//! Application state shared across all Tauri commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` and registered with
//! Tauri's managed state system so that every invoke handler and the
//! playback ticker task can access it.

use ephemere_core::constants::DEFAULT_FEED_URL;
use ephemere_core::{PlaybackConfig, StoryPlayer, StoryRoster};
use tauri::async_runtime::JoinHandle;

/// Central application state.
///
/// Holds the story player, the playback timing configuration, and the
/// handle plus generation stamp of the live playback ticker.
pub struct AppState {
    /// The story playback state machine. Starts over an empty roster and
    /// stays permanently closed if the feed never loads.
    pub player: StoryPlayer,

    /// Playback timing read whenever a new ticker starts.
    pub config: PlaybackConfig,

    /// Handle of the live playback ticker task.
    /// `None` whenever the viewer is closed.
    pub ticker: Option<JoinHandle<()>>,

    /// Generation stamp of the live ticker. A task whose stamp no longer
    /// matches must not touch the player; this covers the window between
    /// an abort being requested and the task actually stopping.
    pub ticker_epoch: u64,

    /// URL of the feed document the roster is loaded from.
    pub feed_url: String,
}

impl AppState {
    /// Create a new, not-yet-loaded application state.
    pub fn new() -> Self {
        Self {
            player: StoryPlayer::new(StoryRoster::empty()),
            config: PlaybackConfig::default(),
            ticker: None,
            ticker_epoch: 0,
            feed_url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
