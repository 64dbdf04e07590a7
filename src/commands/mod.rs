//! Tauri IPC command layer.
//!
//! Thin adapters: validate input, open the database from `AppState`,
//! delegate to repositories or the scheduling core, map errors to `String`
//! for the frontend. No business logic lives here.

pub mod appointment;
pub mod client;
pub mod schedule;
pub mod staff;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
