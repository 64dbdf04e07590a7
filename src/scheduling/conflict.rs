//! First-fit resolution over availability vectors.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::Schedule;

use super::availability::{slot_time, SLOT_MINUTES};

/// A contiguous run of free slots able to hold a requested duration,
/// anchored at the leftmost qualifying position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitWindow {
    pub start_slot: usize,
    pub slots: usize,
}

impl FitWindow {
    /// Concrete start time when placed in the given schedule window.
    pub fn start_in(&self, schedule: &Schedule) -> NaiveTime {
        slot_time(schedule, self.start_slot)
    }

    /// Concrete stop time when placed in the given schedule window.
    pub fn stop_in(&self, schedule: &Schedule) -> NaiveTime {
        slot_time(schedule, self.start_slot + self.slots)
    }
}

/// Scan left to right for the first run of free slots spanning at least
/// `duration_min`. First-fit: the leftmost qualifying run wins, with no
/// attempt to minimize fragmentation. A run exactly equal to the duration
/// qualifies. An empty vector, or a zero duration, yields `None`.
pub fn first_fit(slots: &[bool], duration_min: u32) -> Option<FitWindow> {
    let needed = ((duration_min as i64 + SLOT_MINUTES - 1) / SLOT_MINUTES) as usize;
    if needed == 0 {
        return None;
    }

    let mut run_start = 0;
    let mut run_len = 0;
    for (i, free) in slots.iter().enumerate() {
        if *free {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == needed {
                return Some(FitWindow {
                    start_slot: run_start,
                    slots: needed,
                });
            }
        } else {
            run_len = 0;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn leftmost_run_wins() {
        // Free runs at [1..3] and [4..8]; 60 minutes needs 2 slots
        let slots = [false, true, true, false, true, true, true, true];
        let fit = first_fit(&slots, 60).unwrap();
        assert_eq!(fit.start_slot, 1);
        assert_eq!(fit.slots, 2);
    }

    #[test]
    fn skips_runs_that_are_too_short() {
        // Only the second run can hold 90 minutes (3 slots)
        let slots = [true, true, false, true, true, true];
        let fit = first_fit(&slots, 90).unwrap();
        assert_eq!(fit.start_slot, 3);
        assert_eq!(fit.slots, 3);
    }

    #[test]
    fn no_qualifying_run_yields_none() {
        let slots = [true, false, true, false, true];
        assert_eq!(first_fit(&slots, 60), None);
    }

    #[test]
    fn empty_vector_yields_none() {
        assert_eq!(first_fit(&[], 30), None);
    }

    #[test]
    fn zero_duration_never_fits() {
        assert_eq!(first_fit(&[true, true], 0), None);
    }

    #[test]
    fn exact_fit_is_accepted() {
        // 480 minutes in exactly 16 free slots (a 480-minute window)
        let slots = vec![true; 16];
        let fit = first_fit(&slots, 480).unwrap();
        assert_eq!(fit.start_slot, 0);
        assert_eq!(fit.slots, 16);
        // One more slot of demand no longer fits
        assert_eq!(first_fit(&slots, 481), None);
    }

    #[test]
    fn duration_rounds_up_to_whole_slots() {
        // 45 minutes still occupies 2 slots of 30
        let fit = first_fit(&[true, true, true], 45).unwrap();
        assert_eq!(fit.slots, 2);
    }

    #[test]
    fn idempotent_over_repeated_calls() {
        let slots = [false, true, true, true, false];
        let first = first_fit(&slots, 60);
        let second = first_fit(&slots, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn projects_onto_schedule_times() {
        let schedule = Schedule {
            id: 1,
            day: NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            stop_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            staff_id: 11,
        };
        let fit = FitWindow {
            start_slot: 0,
            slots: 2,
        };
        assert_eq!(
            fit.start_in(&schedule),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            fit.stop_in(&schedule),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }
}
