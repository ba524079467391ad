use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use dontpark_core::{settings::Settings, table};

use crate::route::QueryParams;

/// Handle table requests, answering with an HTML page.
pub async fn handler(
    State(settings): State<Settings>,
    Query(query_pairs): Query<Vec<(String, String)>>,
) -> Response {
    let range = QueryParams::from(query_pairs).year_range(&settings);
    tracing::debug!(
        start_year = range.start(),
        end_year = range.end(),
        "rendering table"
    );
    ([(CONTENT_TYPE, table::CONTENT_TYPE)], table::generate(&range, &settings)).into_response()
}
