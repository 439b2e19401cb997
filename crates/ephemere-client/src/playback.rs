//! Playback ticker: the timer resource behind auto-advance.
//!
//! One live ticker per open session. Every manual transition into `Open`
//! goes through [`restart_ticker`], which aborts the previous task before
//! spawning the next one; every transition out goes through
//! [`stop_ticker`]. Each task carries the epoch it was spawned under and
//! backs off once the epoch moves on, so a task caught in the abort race
//! window can never drive a story it no longer owns.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tauri::AppHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use ephemere_core::{PlayerState, TickOutcome, User};

use crate::events::{
    emit_event, ProgressPayload, StoryPayload, EVENT_PLAYER_CLOSED, EVENT_PROGRESS_CHANGED,
    EVENT_STORY_CHANGED,
};
use crate::state::AppState;

enum TickEvent {
    Progressed { index: usize, progress: u8 },
    Advanced { index: usize, user: User },
    Finished,
}

/// Abort the live ticker (if any) and spawn a fresh one for the story
/// currently displayed. Call on every transition into `Open`; the caller
/// holds the lock behind `guard`.
pub fn restart_ticker(app: &AppHandle, shared: &Arc<Mutex<AppState>>, guard: &mut AppState) {
    guard.ticker_epoch += 1;
    if let Some(handle) = guard.ticker.take() {
        handle.abort();
    }

    let epoch = guard.ticker_epoch;
    let interval_ms = guard.config.tick_interval_ms;
    let step = guard.config.step_percent;

    let app = app.clone();
    let shared = Arc::clone(shared);
    let handle = tauri::async_runtime::spawn(async move {
        run_ticker(app, shared, epoch, interval_ms, step).await;
    });
    guard.ticker = Some(handle);

    debug!(epoch, interval_ms, step, "Playback ticker started");
}

/// Cancel the live ticker, if any. Call on every transition out of `Open`.
pub fn stop_ticker(guard: &mut AppState) {
    guard.ticker_epoch += 1;
    if let Some(handle) = guard.ticker.take() {
        handle.abort();
        debug!(epoch = guard.ticker_epoch, "Playback ticker cancelled");
    }
}

async fn run_ticker(
    app: AppHandle,
    shared: Arc<Mutex<AppState>>,
    epoch: u64,
    interval_ms: u64,
    step: u8,
) {
    let mut interval = time::interval(Duration::from_millis(interval_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // A tokio interval fires its first tick immediately; a story must sit
    // at 0% for a full interval before progressing.
    interval.tick().await;

    loop {
        interval.tick().await;

        let event = {
            let mut guard = match shared.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            if guard.ticker_epoch != epoch {
                debug!(epoch, "Stale ticker backing off");
                return;
            }

            match guard.player.tick(step) {
                TickOutcome::Progressed(progress) => {
                    let PlayerState::Open { current_index, .. } = guard.player.state() else {
                        return;
                    };
                    TickEvent::Progressed {
                        index: current_index,
                        progress,
                    }
                }
                TickOutcome::Advanced(index) => {
                    let Some(user) = guard.player.current_story().cloned() else {
                        return;
                    };
                    TickEvent::Advanced { index, user }
                }
                TickOutcome::Finished => {
                    guard.ticker = None;
                    TickEvent::Finished
                }
                // The viewer closed under us; the session is over.
                TickOutcome::Idle => {
                    guard.ticker = None;
                    return;
                }
            }
        };

        match event {
            TickEvent::Progressed { index, progress } => {
                emit_event(
                    &app,
                    EVENT_PROGRESS_CHANGED,
                    ProgressPayload { index, progress },
                );
            }
            TickEvent::Advanced { index, user } => {
                emit_event(&app, EVENT_STORY_CHANGED, StoryPayload { index, user });
                // The next story gets a fresh full-length window.
                interval.reset();
            }
            TickEvent::Finished => {
                emit_event(&app, EVENT_PLAYER_CLOSED, ());
                return;
            }
        }
    }
}
