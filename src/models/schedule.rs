use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One contiguous working window for one staff member on one day.
///
/// Invariant: `start_time <= stop_time`. Validated before every write and
/// backed by a CHECK constraint in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub stop_time: NaiveTime,
    pub staff_id: i64,
}

impl Schedule {
    /// Window length in minutes.
    pub fn span_minutes(&self) -> i64 {
        (self.stop_time - self.start_time).num_minutes()
    }
}

/// Payload for creating a schedule window; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub stop_time: NaiveTime,
    pub staff_id: i64,
}
