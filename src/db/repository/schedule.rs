use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::query::SelectQuery;
use crate::db::DatabaseError;
use crate::models::{NewSchedule, Schedule, ScheduleFilter};

use super::staff_exists;

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        id: row.get(0)?,
        day: row.get(1)?,
        start_time: row.get(2)?,
        stop_time: row.get(3)?,
        staff_id: row.get(4)?,
    })
}

fn ensure_staff_exists(conn: &Connection, staff_id: i64) -> Result<(), DatabaseError> {
    if !staff_exists(conn, staff_id)? {
        return Err(DatabaseError::ConstraintViolation(format!(
            "staff member {staff_id} does not exist"
        )));
    }
    Ok(())
}

fn ensure_window_ordered(start: NaiveTime, stop: NaiveTime) -> Result<(), DatabaseError> {
    if start > stop {
        return Err(DatabaseError::ConstraintViolation(
            "schedule start time must not be after stop time".into(),
        ));
    }
    Ok(())
}

pub fn insert_schedule(conn: &Connection, schedule: &NewSchedule) -> Result<i64, DatabaseError> {
    ensure_window_ordered(schedule.start_time, schedule.stop_time)?;
    ensure_staff_exists(conn, schedule.staff_id)?;
    conn.execute(
        "INSERT INTO schedule (day, start_time, stop_time, staff_id) VALUES (?1, ?2, ?3, ?4)",
        params![
            schedule.day,
            schedule.start_time,
            schedule.stop_time,
            schedule.staff_id
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_schedule(conn: &Connection, id: i64) -> Result<Option<Schedule>, DatabaseError> {
    conn.query_row(
        "SELECT id, day, start_time, stop_time, staff_id FROM schedule WHERE id = ?1",
        params![id],
        schedule_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn list_schedules(
    conn: &Connection,
    filter: &ScheduleFilter,
) -> Result<Vec<Schedule>, DatabaseError> {
    let mut q = SelectQuery::from("SELECT id, day, start_time, stop_time, staff_id FROM schedule");
    if let Some(id) = filter.id {
        q = q.eq("id", id);
    }
    if let Some(day) = filter.day {
        q = q.eq("day", day);
    }
    if let Some(start_from) = filter.start_from {
        q = q.ge("start_time", start_from);
    }
    if let Some(stop_until) = filter.stop_until {
        q = q.le("stop_time", stop_until);
    }
    if let Some(staff_id) = filter.staff_id {
        q = q.eq("staff_id", staff_id);
    }
    q.order_by("day, start_time").fetch(conn, schedule_from_row)
}

/// Update keyed by schedule id, so one window changes and the member's other
/// windows stay untouched.
pub fn update_schedule(conn: &Connection, schedule: &Schedule) -> Result<(), DatabaseError> {
    ensure_window_ordered(schedule.start_time, schedule.stop_time)?;
    ensure_staff_exists(conn, schedule.staff_id)?;
    let changed = conn.execute(
        "UPDATE schedule SET day = ?1, start_time = ?2, stop_time = ?3, staff_id = ?4
         WHERE id = ?5",
        params![
            schedule.day,
            schedule.start_time,
            schedule.stop_time,
            schedule.staff_id,
            schedule.id
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Schedule".into(),
            id: schedule.id,
        });
    }
    Ok(())
}

/// Removes the schedule row only. The reschedule workflow around a deletion
/// lives in the scheduling module.
pub fn delete_schedule(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM schedule WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Schedule".into(),
            id,
        });
    }
    tracing::info!(schedule_id = id, "schedule deleted");
    Ok(())
}

/// The staff member's windows from `from` onward, ordered by day then start
/// time. Downstream pairs candidates with these by index, so the ordering is
/// part of the contract.
pub fn future_schedules(
    conn: &Connection,
    staff_id: i64,
    from: NaiveDate,
) -> Result<Vec<Schedule>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, day, start_time, stop_time, staff_id FROM schedule
         WHERE staff_id = ?1 AND day >= ?2
         ORDER BY day, start_time",
    )?;
    let rows = stmt.query_map(params![staff_id, from], schedule_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Whether some window of that day contains the time (bounds inclusive).
pub fn is_available(
    conn: &Connection,
    day: NaiveDate,
    time: NaiveTime,
    staff_id: i64,
) -> Result<bool, DatabaseError> {
    let windows = list_schedules(
        conn,
        &ScheduleFilter {
            day: Some(day),
            staff_id: Some(staff_id),
            ..Default::default()
        },
    )?;
    Ok(windows
        .iter()
        .any(|s| s.start_time <= time && time <= s.stop_time))
}
