use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use waduk_core::{ErrorDetails, error_envelope, pretty_json};

use crate::state::AppState;

/// Replaces the generic 5xx message with the recorded cause when the
/// application is not running in production.
pub async fn expose_error_details(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    let Some(ErrorDetails(details)) = response.extensions_mut().remove::<ErrorDetails>() else {
        return response;
    };
    if !state.settings.app.display_error_details() {
        return response;
    }

    pretty_json(response.status(), &error_envelope(&details))
}
