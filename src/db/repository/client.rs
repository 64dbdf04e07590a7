use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::{Client, NewClient};

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
    })
}

pub fn insert_client(conn: &Connection, client: &NewClient) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO clients (name, surname, phone, email) VALUES (?1, ?2, ?3, ?4)",
        params![client.name, client.surname, client.phone, client.email],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_client(conn: &Connection, id: i64) -> Result<Option<Client>, DatabaseError> {
    conn.query_row(
        "SELECT id, name, surname, phone, email FROM clients WHERE id = ?1",
        params![id],
        client_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn list_clients(conn: &Connection) -> Result<Vec<Client>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, surname, phone, email FROM clients ORDER BY surname, name",
    )?;
    let rows = stmt.query_map([], client_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn client_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM clients WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
