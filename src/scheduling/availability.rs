//! Schedule windows as fixed-granularity slot vectors.

use chrono::{Duration, NaiveTime};

use crate::models::Schedule;

/// Slot granularity in minutes. Availability vectors and fit windows are
/// expressed in these units.
pub const SLOT_MINUTES: i64 = 30;

/// Translate a schedule window into its availability vector: one flag per
/// slot across the span, `true` = free. Length is `span / SLOT_MINUTES`
/// (integer division, a trailing partial slot is not bookable). The base
/// case is all-free; bookings do not shade slots in this model.
pub fn free_slots(schedule: &Schedule) -> Vec<bool> {
    let span = schedule.span_minutes();
    if span < SLOT_MINUTES {
        return Vec::new();
    }
    vec![true; (span / SLOT_MINUTES) as usize]
}

/// Clock time of a slot boundary within the window. `slot` 0 is the window
/// start; `slot` equal to the vector length is the last bookable boundary.
pub fn slot_time(schedule: &Schedule, slot: usize) -> NaiveTime {
    schedule.start_time + Duration::minutes(slot as i64 * SLOT_MINUTES)
}
