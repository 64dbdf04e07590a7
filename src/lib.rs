pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod scheduling;
pub mod state;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(Arc::new(state::AppState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::staff::list_staff,
            commands::staff::add_staff,
            commands::staff::update_staff,
            commands::staff::fire_staff,
            commands::staff::remove_staff,
            commands::staff::list_fired_staff,
            commands::client::add_client,
            commands::client::list_clients,
            commands::schedule::list_schedules,
            commands::schedule::add_schedule,
            commands::schedule::update_schedule,
            commands::schedule::delete_schedule,
            commands::schedule::check_availability,
            commands::appointment::book_appointment,
            commands::appointment::list_appointments,
            commands::appointment::cancel_appointment,
            commands::appointment::reschedule_appointment,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
