pub mod calendar;
pub mod root;

use axum::{
    Router,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use monthcal_core::CalendarError;
use tracing::{error, warn};

use crate::render;
use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(calendar::router())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> Response {
    let status = StatusCode::NOT_FOUND;
    (status, Html(render::error_page(status, "page not found").into_string())).into_response()
}

/// Convert anyhow errors to HTML error pages
pub struct AppError(anyhow::Error);

impl AppError {
    /// Bad input is the client's fault, everything else is ours.
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<CalendarError>() {
            Some(CalendarError::InvalidMonth(_)) => StatusCode::BAD_REQUEST,
            Some(CalendarError::DateOutOfRange { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            None if self.0.is::<PathRejection>() => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_client_error() {
            warn!(%status, error = %self.0, "rejected request");
            self.0.to_string()
        } else {
            error!(%status, error = ?self.0, "request failed");
            "internal server error".to_string()
        };

        let body = Html(render::error_page(status, &message).into_string());
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
