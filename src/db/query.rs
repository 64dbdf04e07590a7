//! Predicate-composing SELECT builder.
//!
//! Listings filter on whichever fields the caller set, so the WHERE clause
//! is assembled per call, but always from named columns and bound
//! parameters. Values never travel as SQL text.

use rusqlite::types::ToSql;
use rusqlite::{Connection, Row};

use super::DatabaseError;

/// A SELECT statement under construction. Columns are code-controlled
/// `&'static str` names; every value is bound positionally.
pub struct SelectQuery {
    base: &'static str,
    predicates: Vec<String>,
    order: Option<&'static str>,
    params: Vec<Box<dyn ToSql>>,
}

impl SelectQuery {
    /// Start from a projection, e.g. `"SELECT id, name FROM staff"`.
    pub fn from(base: &'static str) -> Self {
        Self {
            base,
            predicates: Vec::new(),
            order: None,
            params: Vec::new(),
        }
    }

    /// `column = value`
    pub fn eq(mut self, column: &'static str, value: impl ToSql + 'static) -> Self {
        self.predicates.push(format!("{column} = ?"));
        self.params.push(Box::new(value));
        self
    }

    /// `column >= value`
    pub fn ge(mut self, column: &'static str, value: impl ToSql + 'static) -> Self {
        self.predicates.push(format!("{column} >= ?"));
        self.params.push(Box::new(value));
        self
    }

    /// `column <= value`
    pub fn le(mut self, column: &'static str, value: impl ToSql + 'static) -> Self {
        self.predicates.push(format!("{column} <= ?"));
        self.params.push(Box::new(value));
        self
    }

    /// Substring match: `column LIKE '%value%'`. The wildcards wrap the
    /// bound parameter, not the SQL text.
    pub fn contains(mut self, column: &'static str, value: &str) -> Self {
        self.predicates.push(format!("{column} LIKE ?"));
        self.params.push(Box::new(format!("%{value}%")));
        self
    }

    /// `column IS NULL`
    pub fn is_null(mut self, column: &'static str) -> Self {
        self.predicates.push(format!("{column} IS NULL"));
        self
    }

    /// `column = 0` — for boolean flag columns.
    pub fn is_false(mut self, column: &'static str) -> Self {
        self.predicates.push(format!("{column} = 0"));
        self
    }

    /// `ORDER BY clause` (static text, applied last).
    pub fn order_by(mut self, clause: &'static str) -> Self {
        self.order = Some(clause);
        self
    }

    /// The composed statement text.
    pub fn sql(&self) -> String {
        let mut sql = self.base.to_string();
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        if let Some(order) = self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        sql
    }

    /// Prepare, bind and map every row.
    pub fn fetch<T, F>(&self, conn: &Connection, map: F) -> Result<Vec<T>, DatabaseError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let sql = self.sql();
        tracing::debug!(%sql, "select");
        let mut stmt = conn.prepare(&sql)?;
        let params: Vec<&dyn ToSql> = self.params.iter().map(|p| p.as_ref()).collect();
        let rows = stmt.query_map(params.as_slice(), map)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
    }
}
