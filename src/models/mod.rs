pub mod appointment;
pub mod client;
pub mod filters;
pub mod schedule;
pub mod staff;

pub use appointment::*;
pub use client::*;
pub use filters::*;
pub use schedule::*;
pub use staff::*;
