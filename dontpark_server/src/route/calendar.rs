use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use dontpark_core::{calendar, ical::generator::Emitter, settings::Settings};

use crate::route::QueryParams;

/// Handle calendar requests.
///
/// The calendar is sent as the attachment `calendar.ics`.
pub async fn handler(
    State(settings): State<Settings>,
    Query(query_pairs): Query<Vec<(String, String)>>,
) -> Response {
    let range = QueryParams::from(query_pairs).year_range(&settings);
    let ical_calendar = calendar::generate(&range, &settings);
    tracing::debug!(
        start_year = range.start(),
        end_year = range.end(),
        events = ical_calendar.events.len(),
        "generated calendar"
    );
    (
        [
            (CONTENT_TYPE, calendar::CONTENT_TYPE),
            (CONTENT_DISPOSITION, "attachment; filename=calendar.ics"),
        ],
        ical_calendar.generate(),
    )
        .into_response()
}
