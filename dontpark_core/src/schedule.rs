//! The recurring street-cleaning windows.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

use crate::year_range::YearRange;

pub static TITLE: &str = "DONT PARK on the street";
pub static UID_DOMAIN: &str = "dontpark";
pub static CLEANING_WEEKDAY: Weekday = Weekday::Wed;

/// One no-parking window on a specific date.
///
/// The times are wall-clock times in the configured timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub title: String,
    pub uid: String,
}

impl Event {
    fn on(date: NaiveDate) -> Self {
        Self {
            date,
            start: START_TIME,
            end: END_TIME,
            title: String::from(TITLE),
            uid: Event::uid_for(date),
        }
    }

    /// Get a unique id for the window on a specific date.
    ///
    /// Changing this function is a breaking change!
    /// Calendar clients use the uid to recognize events they already know.
    pub fn uid_for(date: NaiveDate) -> String {
        format!(
            "{}-{}-{}@{UID_DOMAIN}",
            date.year(),
            date.month(),
            date.day()
        )
    }
}

pub const START_TIME: NaiveTime = full_hour(8);
pub const END_TIME: NaiveTime = full_hour(12);

const fn full_hour(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time,
        None => panic!("hour out of range"),
    }
}

/// Find the first day of the month falling on `weekday`.
///
/// Only the first seven days are looked at, which always contain every weekday.
/// `None` is returned for months chrono cannot represent.
pub fn first_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_day
        .iter_days()
        .take(7)
        .find(|date| date.weekday() == weekday)
}

/// Generate the windows of every month in the range.
///
/// Per month, the first Wednesday comes first, followed by the Thursday after it.
pub fn generate(range: &YearRange) -> Vec<Event> {
    let mut events = Vec::with_capacity(range.year_count() * 12 * 2);
    for year in range.years() {
        for month in 1..=12 {
            let Some(wednesday) = first_weekday(year, month, CLEANING_WEEKDAY) else {
                continue;
            };
            let Some(thursday) = wednesday.checked_add_days(Days::new(1)) else {
                continue;
            };
            events.push(Event::on(wednesday));
            events.push(Event::on(thursday));
        }
    }
    events
}
