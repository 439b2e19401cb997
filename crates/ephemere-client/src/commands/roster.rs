use std::sync::{Arc, Mutex};

use tauri::{AppHandle, State};
use tauri_plugin_notification::NotificationExt;
use tracing::{error, info};

use ephemere_core::constants::APP_NAME;
use ephemere_core::User;

use crate::events::{emit_event, RosterLoadedPayload, EVENT_ROSTER_LOADED};
use crate::playback;
use crate::state::AppState;

/// Fetch the feed and install the roster. Invoked once by the frontend at
/// startup. On failure the previous roster (initially empty) stays in
/// place, the viewer stays closed, and the user is notified.
#[tauri::command]
pub async fn load_roster(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<Vec<User>, String> {
    let feed_url = {
        let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        guard.feed_url.clone()
    };

    let roster = match ephemere_feed::fetch_roster(&feed_url).await {
        Ok(roster) => roster,
        Err(e) => {
            error!(url = %feed_url, error = %e, "Failed to load feed");
            notify_load_failure(&app, &e.to_string());
            return Err(format!("Error fetching data: {e}"));
        }
    };

    let users = roster.users().to_vec();
    {
        let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        playback::stop_ticker(&mut guard);
        guard.player.install_roster(roster);
    }

    info!(url = %feed_url, users = users.len(), "Roster installed");

    emit_event(
        &app,
        EVENT_ROSTER_LOADED,
        RosterLoadedPayload { users: users.len() },
    );

    Ok(users)
}

/// The roster in navigation order, for the avatar rail.
#[tauri::command]
pub fn list_users(state: State<'_, Arc<Mutex<AppState>>>) -> Result<Vec<User>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.player.roster().users().to_vec())
}

fn notify_load_failure(app: &AppHandle, reason: &str) {
    if let Err(e) = app
        .notification()
        .builder()
        .title(APP_NAME)
        .body(format!("Impossible de charger les stories: {reason}"))
        .show()
    {
        error!(error = %e, "Failed to show load-failure notification");
    }
}
