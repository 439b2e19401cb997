use serde::Serialize;
use tauri::{AppHandle, Emitter};

use ephemere_core::User;

pub const EVENT_ROSTER_LOADED: &str = "roster-loaded";
pub const EVENT_STORY_OPENED: &str = "story-opened";
pub const EVENT_STORY_CHANGED: &str = "story-changed";
pub const EVENT_PROGRESS_CHANGED: &str = "progress-changed";
pub const EVENT_PLAYER_CLOSED: &str = "player-closed";

#[derive(Debug, Clone, Serialize)]
pub struct RosterLoadedPayload {
    pub users: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPayload {
    pub index: usize,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub index: usize,
    pub progress: u8,
}

pub fn emit_event<S: Serialize + Clone>(app: &AppHandle, event: &str, payload: S) {
    if let Err(e) = app.emit(event, payload) {
        tracing::error!(event, error = %e, "Failed to emit event");
    }
}
