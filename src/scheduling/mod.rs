//! Scheduling core: availability translation, first-fit conflict
//! resolution, and the reschedule-on-delete workflow.
//!
//! Everything here is plain library code over an explicit connection
//! handle; the command layer is only a validated adapter on top.

pub mod availability;
pub mod conflict;
pub mod reschedule;

pub use availability::{free_slots, SLOT_MINUTES};
pub use conflict::{first_fit, FitWindow};
pub use reschedule::{
    remove_schedule, reschedule_appointment, DisplacedAppointment, RescheduleOutcome,
};
