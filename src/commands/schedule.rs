//! Schedule desk — Tauri IPC commands.
//!
//! Deleting a schedule is the destructive path: the frontend shows the
//! confirmation dialog, then this layer runs the reschedule workflow and
//! returns a report pairing each displaced appointment with either its
//! candidate slots or a cancellation notice.

use std::sync::Arc;

use chrono::NaiveTime;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::db::repository;
use crate::models::{Appointment, NewSchedule, Schedule, ScheduleFilter};
use crate::scheduling::{self, RescheduleOutcome};
use crate::state::AppState;

/// Concrete slot offered inside a candidate schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start_time: NaiveTime,
    pub stop_time: NaiveTime,
}

/// What the frontend renders for one displaced appointment: a choice of
/// slots, or the terminal cancellation notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RescheduleResolution {
    /// `windows[i]` pairs with `schedules[i]`; `null` marks a window the
    /// appointment does not fit. Order matches the store's future-schedule
    /// listing.
    Options {
        schedules: Vec<Schedule>,
        windows: Vec<Option<SlotWindow>>,
    },
    /// Nothing fits: the appointment stays canceled. Carries the client's
    /// name for the notice.
    CancellationNotice { client_name: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacedAppointmentReport {
    pub appointment: Appointment,
    pub resolution: RescheduleResolution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDeletionReport {
    pub schedule_id: i64,
    pub displaced: Vec<DisplacedAppointmentReport>,
}

pub(crate) fn resolve_outcome(
    conn: &Connection,
    appointment: &Appointment,
    outcome: RescheduleOutcome,
) -> Result<RescheduleResolution, String> {
    match outcome {
        RescheduleOutcome::Rescheduled { schedules, fits } => {
            let windows = schedules
                .iter()
                .zip(&fits)
                .map(|(schedule, fit)| {
                    fit.map(|f| SlotWindow {
                        start_time: f.start_in(schedule),
                        stop_time: f.stop_in(schedule),
                    })
                })
                .collect();
            Ok(RescheduleResolution::Options { schedules, windows })
        }
        RescheduleOutcome::Cancelled => {
            let client_name = repository::get_client(conn, appointment.client_id)
                .map_err(|e| e.to_string())?
                .map(|c| format!("{} {}", c.name, c.surname));
            Ok(RescheduleResolution::CancellationNotice { client_name })
        }
    }
}

/// Lists schedules matching the filter.
#[tauri::command]
pub fn list_schedules(
    filter: ScheduleFilter,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Schedule>, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::list_schedules(&conn, &filter).map_err(|e| e.to_string())
}

/// Creates a schedule window. Returns the new id.
#[tauri::command]
pub fn add_schedule(schedule: NewSchedule, state: State<'_, Arc<AppState>>) -> Result<i64, String> {
    if schedule.start_time > schedule.stop_time {
        return Err("The starting hour must be before the ending hour".into());
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::insert_schedule(&conn, &schedule).map_err(|e| e.to_string())
}

/// Updates one schedule window.
#[tauri::command]
pub fn update_schedule(schedule: Schedule, state: State<'_, Arc<AppState>>) -> Result<(), String> {
    if schedule.start_time > schedule.stop_time {
        return Err("The starting hour must be before the ending hour".into());
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::update_schedule(&conn, &schedule).map_err(|e| e.to_string())
}

/// Deletes a schedule window and reschedules the appointments it held.
/// The frontend must have confirmed the action; the report it gets back
/// drives the option picker and any cancellation notices.
#[tauri::command]
pub fn delete_schedule(
    schedule_id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<ScheduleDeletionReport, String> {
    let conn = state.open_db().map_err(|e| e.to_string())?;

    let schedule = repository::get_schedule(&conn, schedule_id)
        .map_err(|e| e.to_string())?
        .ok_or("Schedule not found")?;

    let today = chrono::Local::now().date_naive();
    let displaced = scheduling::remove_schedule(&conn, &schedule, today)
        .map_err(|e| format!("Could not delete schedule: {e}"))?;

    let mut reports = Vec::with_capacity(displaced.len());
    for item in displaced {
        let resolution = resolve_outcome(&conn, &item.appointment, item.outcome)?;
        reports.push(DisplacedAppointmentReport {
            appointment: item.appointment,
            resolution,
        });
    }

    Ok(ScheduleDeletionReport {
        schedule_id,
        displaced: reports,
    })
}

/// Whether the staff member is on schedule at the given day and time.
#[tauri::command]
pub fn check_availability(
    day: String,
    time: String,
    staff_id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<bool, String> {
    let day = chrono::NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD")?;
    let time = NaiveTime::parse_from_str(&time, "%H:%M")
        .map_err(|_| "Invalid time format. Use HH:MM")?;

    let conn = state.open_db().map_err(|e| e.to_string())?;
    repository::is_available(&conn, day, time, staff_id).map_err(|e| e.to_string())
}
