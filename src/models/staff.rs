use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A staff member. `fired_date` is the soft-delete marker: active members
/// have `None` and are the only ones listed by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub specialties: String,
    pub fired_date: Option<NaiveDate>,
}

/// Payload for creating a staff member; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStaff {
    pub name: String,
    pub surname: String,
    pub specialties: String,
}
