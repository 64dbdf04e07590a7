//! Staff desk — Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::db::repository;
use crate::models::{NewStaff, Staff, StaffFilter};
use crate::state::AppState;

fn validate_person_name(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    if value.len() > 200 {
        return Err(format!("{label} too long (max 200 chars)"));
    }
    Ok(())
}

/// Lists active staff matching the filter.
#[tauri::command]
pub fn list_staff(
    filter: StaffFilter,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Staff>, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::list_staff(&conn, &filter).map_err(|e| e.to_string())
}

/// Registers a staff member. Returns the new id.
#[tauri::command]
pub fn add_staff(staff: NewStaff, state: State<'_, Arc<AppState>>) -> Result<i64, String> {
    validate_person_name("Name", &staff.name)?;
    validate_person_name("Surname", &staff.surname)?;
    if staff.specialties.len() > 500 {
        return Err("Specialties too long (max 500 chars)".into());
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::insert_staff(&conn, &staff).map_err(|e| e.to_string())
}

/// Updates a staff member's record.
#[tauri::command]
pub fn update_staff(staff: Staff, state: State<'_, Arc<AppState>>) -> Result<(), String> {
    validate_person_name("Name", &staff.name)?;
    validate_person_name("Surname", &staff.surname)?;

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::update_staff(&conn, &staff).map_err(|e| e.to_string())
}

/// Soft-deletes a staff member as of today.
#[tauri::command]
pub fn fire_staff(staff_id: i64, state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    let today = chrono::Local::now().date_naive();
    repository::fire_staff(&conn, staff_id, today).map_err(|e| e.to_string())
}

/// Hard-deletes a staff member, cascading into their schedules and
/// appointments. The frontend must have confirmed the action.
#[tauri::command]
pub fn remove_staff(staff_id: i64, state: State<'_, Arc<AppState>>) -> Result<(), String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::delete_staff(&conn, staff_id).map_err(|e| e.to_string())
}

/// Lists members let go on or before the given date (YYYY-MM-DD).
#[tauri::command]
pub fn list_fired_staff(
    before: String,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Staff>, String> {
    let date = chrono::NaiveDate::parse_from_str(&before, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD")?;

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::list_fired_before(&conn, date).map_err(|e| e.to_string())
}
