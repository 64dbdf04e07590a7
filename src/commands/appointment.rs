//! Appointment desk — Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::db::repository;
use crate::models::{Appointment, AppointmentFilter, NewAppointment};
use crate::scheduling;
use crate::state::AppState;

use super::schedule::{resolve_outcome, RescheduleResolution};

/// Longest bookable service: a full day.
const MAX_DURATION_MIN: u32 = 24 * 60;

/// Books an appointment. Returns the new id.
#[tauri::command]
pub fn book_appointment(
    appointment: NewAppointment,
    state: State<'_, Arc<AppState>>,
) -> Result<i64, String> {
    if appointment.service.trim().is_empty() {
        return Err("Service is required".into());
    }
    if appointment.service.len() > 200 {
        return Err("Service name too long (max 200 chars)".into());
    }
    if appointment.duration_min == 0 {
        return Err("Duration must be positive".into());
    }
    if appointment.duration_min > MAX_DURATION_MIN {
        return Err("Duration too long (max 24 hours)".into());
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;

    let on_schedule = repository::is_available(
        &conn,
        appointment.day,
        appointment.start_time,
        appointment.staff_id,
    )
    .map_err(|e| e.to_string())?;
    if !on_schedule {
        return Err("The staff member is not on schedule at that time".into());
    }

    repository::book_appointment(&conn, &appointment).map_err(|e| e.to_string())
}

/// Lists appointments matching the filter.
#[tauri::command]
pub fn list_appointments(
    filter: AppointmentFilter,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Appointment>, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::list_appointments(&conn, &filter).map_err(|e| e.to_string())
}

/// Soft-deletes an appointment.
#[tauri::command]
pub fn cancel_appointment(
    appointment_id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::cancel_appointment(&conn, appointment_id).map_err(|e| e.to_string())
}

/// Runs the reschedule workflow for one appointment: soft-deletes it and
/// returns candidate slots, or the cancellation notice when nothing fits.
#[tauri::command]
pub fn reschedule_appointment(
    appointment_id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<RescheduleResolution, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;

    let appointment = repository::get_appointment(&conn, appointment_id)
        .map_err(|e| e.to_string())?
        .ok_or("Appointment not found")?;

    let today = chrono::Local::now().date_naive();
    let outcome = scheduling::reschedule_appointment(&conn, &appointment, today)
        .map_err(|e| format!("Could not reschedule: {e}"))?;

    resolve_outcome(&conn, &appointment, outcome)
}
