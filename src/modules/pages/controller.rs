use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use chrono::Utc;
use tracing::instrument;
use waduk_core::{AppError, tanggal_format};

use super::templates::{ForbiddenTemplate, LoginTemplate, TestTemplate};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn test_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let app = &state.settings.app;
    let template = TestTemplate {
        app_name: &app.name,
        today: tanggal_format(Utc::now().timestamp(), true, app.timezone),
    };
    Ok(Html(template.render()?))
}

/// Where the session guard sends anonymous and expired visitors.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = LoginTemplate {
        app_name: &state.settings.app.name,
    };
    Ok(Html(template.render()?))
}

/// Where the role guards send users lacking the required role.
#[instrument(skip(state))]
pub async fn forbidden_page(
    State(state): State<AppState>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let template = ForbiddenTemplate {
        app_name: &state.settings.app.name,
    };
    Ok((StatusCode::FORBIDDEN, Html(template.render()?)))
}
