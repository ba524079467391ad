//! This crate computes the "DONT PARK on the street" windows of a street-cleaning schedule.
//!
//! Cleaning happens on the first Wednesday of every month and on the Thursday after it,
//! each time from 08:00 to 12:00 local time.
//! The events can be encoded as an iCalendar file or rendered as an HTML table.

pub use chrono_tz;
pub use ical;

pub mod calendar;
pub mod schedule;
pub mod settings;
pub mod table;
pub mod year_range;
