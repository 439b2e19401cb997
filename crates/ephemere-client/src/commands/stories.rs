use std::sync::{Arc, Mutex};

use tauri::{AppHandle, State};
use tracing::info;

use ephemere_core::{NavOutcome, PlayerState, User, UserId};

use crate::events::{
    emit_event, StoryPayload, EVENT_PLAYER_CLOSED, EVENT_STORY_CHANGED, EVENT_STORY_OPENED,
};
use crate::playback;
use crate::state::AppState;

#[tauri::command]
pub fn open_story(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
    user_id: u64,
) -> Result<User, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let index = guard
        .player
        .open(UserId(user_id))
        .map_err(|e| e.to_string())?;
    let user = guard
        .player
        .current_story()
        .cloned()
        .ok_or_else(|| "No story at the opened index".to_string())?;

    playback::restart_ticker(&app, state.inner(), &mut guard);

    info!(user_id, index, "Story opened");

    emit_event(
        &app,
        EVENT_STORY_OPENED,
        StoryPayload {
            index,
            user: user.clone(),
        },
    );

    Ok(user)
}

#[tauri::command]
pub fn close_story(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    playback::stop_ticker(&mut guard);
    guard.player.close();

    info!("Story viewer closed");

    emit_event(&app, EVENT_PLAYER_CLOSED, ());

    Ok(())
}

#[tauri::command]
pub fn next_story(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<Option<User>, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let outcome = guard.player.advance();
    let user = after_navigation(&app, state.inner(), &mut guard, outcome);

    info!(moved = user.is_some(), "Forward navigation");

    Ok(user)
}

#[tauri::command]
pub fn prev_story(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<Option<User>, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let outcome = guard.player.retreat();
    let user = after_navigation(&app, state.inner(), &mut guard, outcome);

    info!(moved = user.is_some(), "Backward navigation");

    Ok(user)
}

/// A tap on the full-bleed story surface. The split at the horizontal
/// midpoint is the entire manual-navigation interface: left half goes
/// back, the rest goes forward.
#[tauri::command]
pub fn tap_story(
    app: AppHandle,
    state: State<'_, Arc<Mutex<AppState>>>,
    x: f64,
    width: f64,
) -> Result<Option<User>, String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let outcome = guard.player.tap(x, width);
    let user = after_navigation(&app, state.inner(), &mut guard, outcome);

    info!(x, width, moved = user.is_some(), "Tap navigation");

    Ok(user)
}

#[tauri::command]
pub fn current_story(state: State<'_, Arc<Mutex<AppState>>>) -> Result<Option<User>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.player.current_story().cloned())
}

#[tauri::command]
pub fn player_state(state: State<'_, Arc<Mutex<AppState>>>) -> Result<PlayerState, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.player.state())
}

/// Shared tail of every manual navigation: restart the ticker and announce
/// the new story, or cancel it and announce the close.
fn after_navigation(
    app: &AppHandle,
    shared: &Arc<Mutex<AppState>>,
    guard: &mut AppState,
    outcome: NavOutcome,
) -> Option<User> {
    match outcome {
        NavOutcome::Moved(index) => {
            let user = guard.player.current_story().cloned();
            playback::restart_ticker(app, shared, guard);
            if let Some(ref user) = user {
                emit_event(
                    app,
                    EVENT_STORY_CHANGED,
                    StoryPayload {
                        index,
                        user: user.clone(),
                    },
                );
            }
            user
        }
        NavOutcome::Closed => {
            playback::stop_ticker(guard);
            emit_event(app, EVENT_PLAYER_CLOSED, ());
            None
        }
    }
}
