use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::info;

use ephemere_core::constants::MIN_TICK_INTERVAL_MS;
use ephemere_core::PlaybackConfig;

use crate::state::AppState;

/// Playback settings surfaced to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub tick_interval_ms: u64,
    pub step_percent: u8,
    pub feed_url: String,
}

#[tauri::command]
pub fn get_playback_settings(
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<PlaybackSettings, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    Ok(PlaybackSettings {
        tick_interval_ms: guard.config.tick_interval_ms,
        step_percent: guard.config.step_percent,
        feed_url: guard.feed_url.clone(),
    })
}

/// Update the playback rate and feed URL. Takes effect when the next
/// ticker starts; a story already playing keeps its rate.
#[tauri::command]
pub fn update_playback_settings(
    state: State<'_, Arc<Mutex<AppState>>>,
    settings: PlaybackSettings,
) -> Result<(), String> {
    if settings.step_percent == 0 || settings.step_percent > 100 {
        return Err("Step must be between 1 and 100 percent".into());
    }
    if settings.tick_interval_ms < MIN_TICK_INTERVAL_MS {
        return Err(format!(
            "Tick interval must be at least {MIN_TICK_INTERVAL_MS} ms"
        ));
    }

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    guard.config = PlaybackConfig {
        tick_interval_ms: settings.tick_interval_ms,
        step_percent: settings.step_percent,
    };
    guard.feed_url = settings.feed_url;

    info!(
        interval_ms = guard.config.tick_interval_ms,
        step = guard.config.step_percent,
        "Playback settings updated"
    );

    Ok(())
}
