pub mod calendar;
pub mod table;

use dontpark_core::{
    settings::Settings,
    year_range::{current_year, YearParams, YearRange},
};

/// The year parameters of the query string.
///
/// They are kept as strings so malformed values fall back to the default range
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    start_year: Option<String>,
    end_year: Option<String>,
    year: Option<String>,
}

/// Collect the year parameters from the raw query pairs.
///
/// A repeated key keeps its first value, unknown keys are ignored.
impl From<Vec<(String, String)>> for QueryParams {
    fn from(value: Vec<(String, String)>) -> Self {
        let mut query_params = QueryParams::default();
        for (key, value) in value {
            let slot = match key.as_str() {
                "start_year" => &mut query_params.start_year,
                "end_year" => &mut query_params.end_year,
                "year" => &mut query_params.year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query_params
    }
}

impl QueryParams {
    fn year_params(&self) -> YearParams<'_> {
        YearParams {
            start_year: self.start_year.as_deref(),
            end_year: self.end_year.as_deref(),
            year: self.year.as_deref(),
        }
    }

    /// Resolve the requested range against the current year of the configured timezone.
    pub fn year_range(&self, settings: &Settings) -> YearRange {
        YearRange::resolve(
            &self.year_params(),
            current_year(settings.timezone),
            settings,
        )
    }
}
