//! Month view endpoint

use axum::{
    Router,
    extract::{Path, rejection::PathRejection},
    response::Html,
    routing::get,
};
use monthcal_core::grid;
use tracing::debug;

use crate::render;
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar/{year}/{month}", get(show_month))
}

/// GET /calendar/:year/:month - Render one month
///
/// Segments are read as i64 so an oversized year reaches the core and is
/// reported as out of range rather than as a malformed path.
async fn show_month(
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path((year, month)) = path?;

    let grid = grid::build(year, month)?;
    debug!(
        month = %grid.month_ref(),
        leading_blanks = grid.leading_blanks(),
        days = grid.days_in_month(),
        "built month grid"
    );

    Ok(Html(render::month_page(&grid).into_string()))
}
