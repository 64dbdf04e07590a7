use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::query::SelectQuery;
use crate::db::DatabaseError;
use crate::models::{NewStaff, Staff, StaffFilter};

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        specialties: row.get(3)?,
        fired_date: row.get(4)?,
    })
}

pub fn insert_staff(conn: &Connection, staff: &NewStaff) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO staff (name, surname, specialties) VALUES (?1, ?2, ?3)",
        params![staff.name, staff.surname, staff.specialties],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_staff(conn: &Connection, id: i64) -> Result<Option<Staff>, DatabaseError> {
    conn.query_row(
        "SELECT id, name, surname, specialties, fired_date FROM staff WHERE id = ?1",
        params![id],
        staff_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Active staff matching the filter. Members who have been let go never
/// appear here; see [`list_fired_before`].
pub fn list_staff(conn: &Connection, filter: &StaffFilter) -> Result<Vec<Staff>, DatabaseError> {
    let mut q = SelectQuery::from("SELECT id, name, surname, specialties, fired_date FROM staff")
        .is_null("fired_date");
    if let Some(id) = filter.id {
        q = q.eq("id", id);
    }
    if let Some(ref name) = filter.name {
        q = q.contains("name", name);
    }
    if let Some(ref surname) = filter.surname {
        q = q.contains("surname", surname);
    }
    if let Some(ref specialties) = filter.specialties {
        q = q.contains("specialties", specialties);
    }
    q.order_by("surname, name").fetch(conn, staff_from_row)
}

pub fn update_staff(conn: &Connection, staff: &Staff) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE staff SET name = ?1, surname = ?2, specialties = ?3 WHERE id = ?4",
        params![staff.name, staff.surname, staff.specialties, staff.id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Staff".into(),
            id: staff.id,
        });
    }
    Ok(())
}

/// Soft delete: records the date the member was let go. The row stays so
/// history (old schedules, appointments) keeps resolving.
pub fn fire_staff(conn: &Connection, id: i64, date: NaiveDate) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE staff SET fired_date = ?1 WHERE id = ?2",
        params![date, id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Staff".into(),
            id,
        });
    }
    tracing::info!(staff_id = id, "staff member marked as fired");
    Ok(())
}

/// Hard delete. Cascades into the member's schedules and appointments.
pub fn delete_staff(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM staff WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Staff".into(),
            id,
        });
    }
    Ok(())
}

/// Members let go on or before the given date, e.g. for periodic purging.
pub fn list_fired_before(conn: &Connection, date: NaiveDate) -> Result<Vec<Staff>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, surname, specialties, fired_date FROM staff
         WHERE fired_date IS NOT NULL AND fired_date <= ?1",
    )?;
    let rows = stmt.query_map(params![date], staff_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn staff_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM staff WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
