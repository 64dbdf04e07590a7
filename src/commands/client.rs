//! Client registry — Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::db::repository;
use crate::models::{Client, NewClient};
use crate::state::AppState;

/// Registers a client. Returns the new id.
#[tauri::command]
pub fn add_client(client: NewClient, state: State<'_, Arc<AppState>>) -> Result<i64, String> {
    if client.name.trim().is_empty() {
        return Err("Name is required".into());
    }
    if client.surname.trim().is_empty() {
        return Err("Surname is required".into());
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::insert_client(&conn, &client).map_err(|e| e.to_string())
}

/// Lists every registered client.
#[tauri::command]
pub fn list_clients(state: State<'_, Arc<AppState>>) -> Result<Vec<Client>, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::list_clients(&conn).map_err(|e| e.to_string())
}
