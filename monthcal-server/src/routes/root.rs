//! Root endpoint redirecting to the current month

use axum::{Router, extract::State, response::Html, routing::get};
use monthcal_core::MonthRef;
use tracing::debug;

use crate::render;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(current_month))
}

/// GET / - Redirect to today's month without building a grid
async fn current_month(State(state): State<AppState>) -> Html<String> {
    let target = MonthRef::containing(state.today());
    debug!(month = %target, "redirecting to current month");

    Html(render::redirect_page(target).into_string())
}
