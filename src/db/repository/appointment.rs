use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::query::SelectQuery;
use crate::db::DatabaseError;
use crate::models::{Appointment, AppointmentFilter, NewAppointment, Schedule};

use super::{client_exists, staff_exists};

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        service: row.get(1)?,
        duration_min: row.get(2)?,
        day: row.get(3)?,
        start_time: row.get(4)?,
        client_id: row.get(5)?,
        staff_id: row.get(6)?,
        canceled: row.get(7)?,
    })
}

const APPOINTMENT_PROJECTION: &str =
    "SELECT id, service, duration_min, day, start_time, client_id, staff_id, canceled
         FROM appointments";

pub fn book_appointment(
    conn: &Connection,
    appointment: &NewAppointment,
) -> Result<i64, DatabaseError> {
    if !staff_exists(conn, appointment.staff_id)? {
        return Err(DatabaseError::ConstraintViolation(format!(
            "staff member {} does not exist",
            appointment.staff_id
        )));
    }
    if !client_exists(conn, appointment.client_id)? {
        return Err(DatabaseError::ConstraintViolation(format!(
            "client {} does not exist",
            appointment.client_id
        )));
    }
    conn.execute(
        "INSERT INTO appointments (service, duration_min, day, start_time, client_id, staff_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            appointment.service,
            appointment.duration_min,
            appointment.day,
            appointment.start_time,
            appointment.client_id,
            appointment.staff_id
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    conn.query_row(
        "SELECT id, service, duration_min, day, start_time, client_id, staff_id, canceled
         FROM appointments WHERE id = ?1",
        params![id],
        appointment_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn list_appointments(
    conn: &Connection,
    filter: &AppointmentFilter,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut q = SelectQuery::from(APPOINTMENT_PROJECTION);
    if !filter.include_canceled {
        q = q.is_false("canceled");
    }
    if let Some(day) = filter.day {
        q = q.eq("day", day);
    }
    if let Some(client_id) = filter.client_id {
        q = q.eq("client_id", client_id);
    }
    if let Some(staff_id) = filter.staff_id {
        q = q.eq("staff_id", staff_id);
    }
    q.order_by("day, start_time").fetch(conn, appointment_from_row)
}

/// Active appointments booked inside the given window: same staff member,
/// same day, start within `[start_time, stop_time)`.
pub fn appointments_for_schedule(
    conn: &Connection,
    schedule: &Schedule,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, service, duration_min, day, start_time, client_id, staff_id, canceled
         FROM appointments
         WHERE staff_id = ?1 AND day = ?2
           AND start_time >= ?3 AND start_time < ?4
           AND canceled = 0
         ORDER BY start_time",
    )?;
    let rows = stmt.query_map(
        params![
            schedule.staff_id,
            schedule.day,
            schedule.start_time,
            schedule.stop_time
        ],
        appointment_from_row,
    )?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Soft delete: the appointment no longer holds a slot but stays on record.
pub fn cancel_appointment(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE appointments SET canceled = 1 WHERE id = ?1",
        params![id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Appointment".into(),
            id,
        });
    }
    tracing::info!(appointment_id = id, "appointment canceled");
    Ok(())
}
