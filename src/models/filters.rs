use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Staff listing filter. Unset fields match everything; listings only ever
/// return members who have not been let go.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StaffFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub specialties: Option<String>,
}

/// Schedule listing filter. `start_from`/`stop_until` bound the window:
/// `start_time >= start_from` and `stop_time <= stop_until`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScheduleFilter {
    pub id: Option<i64>,
    pub day: Option<NaiveDate>,
    pub start_from: Option<NaiveTime>,
    pub stop_until: Option<NaiveTime>,
    pub staff_id: Option<i64>,
}

/// Appointment listing filter. Canceled appointments are excluded unless
/// `include_canceled` is set.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub day: Option<NaiveDate>,
    pub client_id: Option<i64>,
    pub staff_id: Option<i64>,
    pub include_canceled: bool,
}
