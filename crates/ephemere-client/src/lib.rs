pub mod commands;
pub mod events;
pub mod playback;
pub mod state;

use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, EnvFilter};

use crate::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("ephemere_client_lib=debug,ephemere_feed=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting Éphémère desktop client");

    let app_state = Arc::new(Mutex::new(AppState::new()));

    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            commands::roster::load_roster,
            commands::roster::list_users,
            commands::stories::open_story,
            commands::stories::close_story,
            commands::stories::next_story,
            commands::stories::prev_story,
            commands::stories::tap_story,
            commands::stories::current_story,
            commands::stories::player_state,
            commands::settings::get_playback_settings,
            commands::settings::update_playback_settings,
        ])
        .run(tauri::generate_context!())
        .expect("Failed to run Tauri application");
}
