//! Render the windows as an HTML table, one row per month.

use std::fmt::Write as _;

use crate::{
    schedule::{self, Event, TITLE},
    settings::Settings,
    year_range::YearRange,
};

pub static CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub static FILE_NAME: &str = "calendar.html";

static DATE_FORMAT: &str = "%Y-%m-%d";
static TIME_FORMAT: &str = "%H:%M";

/// Render the table for a range of years.
pub fn generate(range: &YearRange, settings: &Settings) -> String {
    render(range, &schedule::generate(range), settings)
}

/// Render already generated events.
///
/// The events are expected in the order produced by [`schedule::generate`], a Wednesday
/// followed by its Thursday.
pub fn render(range: &YearRange, events: &[Event], settings: &Settings) -> String {
    let years = if range.start() == range.end() {
        range.start().to_string()
    } else {
        format!("{} - {}", range.start(), range.end())
    };
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{TITLE} {years}</title>").ok();
    html.push_str("</head>\n<body>\n");
    writeln!(
        html,
        "<h1>{TITLE} {years}</h1>\n<p>All times are local to {}.</p>",
        settings.timezone.name()
    )
    .ok();
    html.push_str("<table>\n<thead>\n<tr><th>Month</th><th>Wednesday</th><th>Thursday</th><th>Time</th><th>Title</th></tr>\n</thead>\n<tbody>\n");
    for pair in events.chunks(2) {
        let [wednesday, thursday] = pair else {
            continue;
        };
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} - {}</td><td>{}</td></tr>",
            wednesday.date.format("%B %Y"),
            wednesday.date.format(DATE_FORMAT),
            thursday.date.format(DATE_FORMAT),
            wednesday.start.format(TIME_FORMAT),
            wednesday.end.format(TIME_FORMAT),
            wednesday.title,
        )
        .ok();
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
