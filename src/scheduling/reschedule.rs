//! Reschedule-on-delete workflow.
//!
//! Deleting a schedule window displaces the appointments booked inside it.
//! Each one is soft-deleted, then the staff member's future windows are
//! scanned for a slot run long enough to hold it. The outcome is a result
//! variant the presentation layer renders: candidate slots for the user to
//! pick from, or a cancellation notice when nothing fits.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::repository::{
    appointments_for_schedule, cancel_appointment, delete_schedule, future_schedules,
};
use crate::db::DatabaseError;
use crate::models::{Appointment, Schedule};

use super::availability::free_slots;
use super::conflict::{first_fit, FitWindow};

/// Terminal result of one appointment's reschedule attempt. Store failures
/// are reported separately as `Err(DatabaseError)`, so a caller can always
/// tell "nothing available" from "could not query".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RescheduleOutcome {
    /// At least one future window can hold the appointment. `fits[i]` pairs
    /// with `schedules[i]` by position; `None` marks a window that cannot
    /// hold it. Nothing is auto-selected; the choice belongs to the user.
    Rescheduled {
        schedules: Vec<Schedule>,
        fits: Vec<Option<FitWindow>>,
    },
    /// No future window can hold the appointment. It stays soft-deleted;
    /// the caller must surface this terminal outcome before moving on.
    Cancelled,
}

/// One displaced appointment and how its reschedule attempt ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacedAppointment {
    pub appointment: Appointment,
    pub outcome: RescheduleOutcome,
}

/// Delete a schedule window and walk every appointment booked inside it
/// through the reschedule workflow.
///
/// Runs in one scoped transaction: a store failure at any step rolls back
/// the deletion and every soft-delete, so no appointment can end up
/// displaced without its outcome ever being reported. A window with no
/// linked appointments is simply deleted and the report comes back empty.
pub fn remove_schedule(
    conn: &Connection,
    schedule: &Schedule,
    today: NaiveDate,
) -> Result<Vec<DisplacedAppointment>, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let linked = appointments_for_schedule(&tx, schedule)?;
    delete_schedule(&tx, schedule.id)?;
    tracing::info!(
        schedule_id = schedule.id,
        displaced = linked.len(),
        "schedule removed"
    );

    let mut displaced = Vec::with_capacity(linked.len());
    for appointment in linked {
        let outcome = reschedule_displaced(&tx, &appointment, today)?;
        displaced.push(DisplacedAppointment {
            appointment,
            outcome,
        });
    }

    tx.commit()?;
    Ok(displaced)
}

/// Run the reschedule steps for a single displaced appointment in its own
/// scoped transaction.
pub fn reschedule_appointment(
    conn: &Connection,
    appointment: &Appointment,
    today: NaiveDate,
) -> Result<RescheduleOutcome, DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    let outcome = reschedule_displaced(&tx, appointment, today)?;
    tx.commit()?;
    Ok(outcome)
}

/// The steps shared by both entry points: soft-delete the appointment so it
/// no longer holds a slot, scan the staff member's future windows in store
/// order, and build the positional candidate list.
fn reschedule_displaced(
    conn: &Connection,
    appointment: &Appointment,
    today: NaiveDate,
) -> Result<RescheduleOutcome, DatabaseError> {
    cancel_appointment(conn, appointment.id)?;

    let schedules = future_schedules(conn, appointment.staff_id, today)?;
    let fits: Vec<Option<FitWindow>> = schedules
        .iter()
        .map(|s| first_fit(&free_slots(s), appointment.duration_min))
        .collect();

    if schedules.is_empty() || fits.iter().all(Option::is_none) {
        tracing::info!(appointment_id = appointment.id, "no reschedule candidate");
        Ok(RescheduleOutcome::Cancelled)
    } else {
        Ok(RescheduleOutcome::Rescheduled { schedules, fits })
    }
}
