//! Turn loosely typed year input into a validated, inclusive range of years.
//!
//! Input comes from query strings and command line flags. Anything that is not a plain
//! decimal year falls back to a default range instead of being reported as an error.

use std::ops::RangeInclusive;

use chrono::{Datelike, Utc};
use chrono_tz::Tz;

use crate::settings::Settings;

pub static MIN_YEAR: i32 = 1;
pub static MAX_YEAR: i32 = 9999;

/// An inclusive range of years, `start <= end`, both within [`MIN_YEAR`] and [`MAX_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

/// The raw year parameters of a request, as given by the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearParams<'a> {
    pub start_year: Option<&'a str>,
    pub end_year: Option<&'a str>,
    pub year: Option<&'a str>,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Option<Self> {
        if start > end || !is_valid_year(start) || !is_valid_year(end) {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn single(year: i32) -> Option<Self> {
        Self::new(year, year)
    }

    /// The range used when the request does not name usable years.
    ///
    /// Near [`MAX_YEAR`] the range is cut short instead of overflowing.
    pub fn default_from(current_year: i32, settings: &Settings) -> Self {
        let start = current_year.clamp(MIN_YEAR, MAX_YEAR);
        let end = start
            .saturating_add(i32::from(settings.default_span))
            .min(MAX_YEAR);
        Self { start, end }
    }

    /// Pick the range of a request.
    ///
    /// A valid `start_year`/`end_year` pair wins, then a single `year`, then the default
    /// range starting at `current_year`.
    pub fn resolve(params: &YearParams, current_year: i32, settings: &Settings) -> Self {
        let explicit_range = match (
            params.start_year.and_then(parse_year),
            params.end_year.and_then(parse_year),
        ) {
            (Some(start), Some(end)) => Self::new(start, end)
                .filter(|range| range.end - range.start <= i32::from(settings.max_span)),
            _ => None,
        };
        explicit_range
            .or_else(|| params.year.and_then(parse_year).and_then(Self::single))
            .unwrap_or_else(|| Self::default_from(current_year, settings))
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// The number of years in the range, never zero.
    pub fn year_count(&self) -> usize {
        // `end >= start` is guaranteed by construction.
        (self.end - self.start) as usize + 1
    }
}

/// Parse a year consisting of ASCII digits only.
///
/// Signs, whitespace and anything outside [`MIN_YEAR`]..=[`MAX_YEAR`] are rejected.
pub fn parse_year(value: &str) -> Option<i32> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|year| is_valid_year(*year))
}

/// The current year as seen in the given timezone.
pub fn current_year(timezone: Tz) -> i32 {
    Utc::now().with_timezone(&timezone).year()
}

fn is_valid_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}
