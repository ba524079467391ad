//! Encode the windows as an iCalendar document.

use chrono::{DateTime, NaiveDateTime, Utc};
use ical::{
    generator::{IcalCalendar, IcalCalendarBuilder, IcalEvent, IcalEventBuilder, Property},
    ical_property,
};

use crate::{
    schedule::{self, Event},
    settings::Settings,
    year_range::YearRange,
};

static PROD_ID: &str = "-//DONT PARK on the street Calendar//example.com//";
static FORMAT_LOCAL: &str = "%Y%m%dT%H%M%S";
static FORMAT_UTC: &str = "%Y%m%dT%H%M%SZ";

pub static CONTENT_TYPE: &str = "text/calendar";
pub static FILE_NAME: &str = "calendar.ics";

/// Get the calendar for a range of years, stamped with the current time.
pub fn generate(range: &YearRange, settings: &Settings) -> IcalCalendar {
    build(&schedule::generate(range), settings, Utc::now())
}

/// Build the calendar from already generated events.
///
/// `stamp` becomes the `DTSTAMP` of every event.
pub fn build(events: &[Event], settings: &Settings, stamp: DateTime<Utc>) -> IcalCalendar {
    let mut calendar = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid(PROD_ID)
        .build();
    let stamp = stamp.format(FORMAT_UTC).to_string();
    calendar.events.extend(
        events
            .iter()
            .map(|event| get_event(event, settings.timezone.name(), &stamp)),
    );
    calendar
}

/// Build a single `VEVENT` with local start and end times in `tzid`.
fn get_event(event: &Event, tzid: &str, stamp: &str) -> IcalEvent {
    let start = NaiveDateTime::new(event.date, event.start);
    let end = NaiveDateTime::new(event.date, event.end);
    IcalEventBuilder::tzid(tzid)
        .uid(&event.uid)
        .changed_utc(stamp)
        .start(start.format(FORMAT_LOCAL).to_string())
        .end(end.format(FORMAT_LOCAL).to_string())
        .set(ical_property!("SUMMARY", &event.title))
        .build()
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use chrono::TimeZone;
    use ical::{generator::Emitter, IcalParser};

    use super::*;

    fn get_test_calendar() -> IcalCalendar {
        let events = schedule::generate(&YearRange::single(2024).unwrap());
        let stamp = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        build(&events, &Settings::default(), stamp)
    }

    fn get_property<'a>(event: &'a IcalEvent, name: &str) -> &'a Property {
        event
            .properties
            .iter()
            .find(|property| property.name == name)
            .unwrap()
    }

    fn get_property_value<'a>(event: &'a IcalEvent, name: &str) -> &'a str {
        get_property(event, name).value.as_deref().unwrap()
    }

    #[test]
    fn test_build() {
        let calendar = get_test_calendar();
        assert_eq!(calendar.events.len(), 24);
        let wednesday = &calendar.events[0];
        assert_eq!(get_property_value(wednesday, "UID"), "2024-1-3@dontpark");
        assert_eq!(get_property_value(wednesday, "DTSTAMP"), "20240315T093000Z");
        assert_eq!(get_property_value(wednesday, "DTSTART"), "20240103T080000");
        assert_eq!(get_property_value(wednesday, "DTEND"), "20240103T120000");
        assert_eq!(
            get_property_value(wednesday, "SUMMARY"),
            "DONT PARK on the street"
        );
        let thursday = &calendar.events[1];
        assert_eq!(get_property_value(thursday, "DTSTART"), "20240104T080000");
        assert_eq!(get_property_value(thursday, "UID"), "2024-1-4@dontpark");
    }

    #[test]
    fn test_build_timezone() {
        let events = schedule::generate(&YearRange::single(2024).unwrap());
        let settings = Settings {
            timezone: chrono_tz::America::New_York,
            ..Settings::default()
        };
        let calendar = build(&events, &settings, Utc::now());
        let dtstart = get_property(&calendar.events[0], "DTSTART");
        assert_eq!(
            dtstart.params,
            Some(vec![(
                String::from("TZID"),
                vec![String::from("America/New_York")]
            )])
        );
    }

    #[test]
    fn test_emit() {
        let ics = get_test_calendar().generate();
        let parser = IcalParser::new(BufReader::new(Cursor::new(ics)));
        let calendars = parser.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(calendars.len(), 1);
        let parsed = &calendars[0];
        let prod_id = parsed
            .properties
            .iter()
            .find(|property| property.name == "PRODID")
            .and_then(|property| property.value.as_deref());
        assert_eq!(
            prod_id,
            Some("-//DONT PARK on the street Calendar//example.com//")
        );
        assert_eq!(parsed.events.len(), 24);
        let last = &parsed.events[23];
        assert_eq!(get_property_value(last, "UID"), "2024-12-5@dontpark");
        assert_eq!(get_property_value(last, "DTSTART"), "20241205T080000");
        assert_eq!(get_property_value(last, "DTEND"), "20241205T120000");
        assert_eq!(get_property_value(last, "DTSTAMP"), "20240315T093000Z");
        assert_eq!(
            get_property_value(last, "SUMMARY"),
            "DONT PARK on the street"
        );
        assert_eq!(
            get_property(last, "DTSTART").params,
            Some(vec![(
                String::from("TZID"),
                vec![String::from("Europe/Stockholm")]
            )])
        );
    }

    #[test]
    fn test_generate() {
        let calendar = generate(
            &YearRange::new(2023, 2025).unwrap(),
            &Settings::default(),
        );
        assert_eq!(calendar.events.len(), 72);
    }
}
