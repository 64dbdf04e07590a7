use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A booked service. `day`/`start_time` are the booked slot; the link to a
/// schedule window goes through them (same staff member, start inside the
/// window). Displaced appointments are soft-deleted via `canceled`, never
/// removed from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub service: String,
    pub duration_min: u32,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub client_id: i64,
    pub staff_id: i64,
    pub canceled: bool,
}

/// Payload for booking an appointment; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub service: String,
    pub duration_min: u32,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub client_id: i64,
    pub staff_id: i64,
}
