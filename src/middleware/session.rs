//! Logged-in guard for browser routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tower_sessions::Session;
use waduk_core::{AppError, not_found_envelope};
use waduk_models::CurrentUser;

use crate::middleware::{LOGIN_PATH, redirect_found};
use crate::modules::users::service::UserService;
use crate::modules::users::session::UserSession;
use crate::state::AppState;

/// Lets the request through only while the session's refresh time lies in
/// the future and its user still exists. Expired or anonymous sessions are
/// destroyed and sent to the login page.
pub async fn require_login(
    State(state): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let refresh_time = UserSession::refresh_time(&session).await?;
    if !UserSession::is_active(refresh_time, Utc::now().timestamp()) {
        tracing::debug!(refresh_time = ?refresh_time, "Session expired or missing");
        UserSession::destroy(&session).await?;
        return Ok(redirect_found(LOGIN_PATH));
    }

    let Some(user) = UserService::current_user(&state.db, &session).await? else {
        tracing::warn!("Session refers to a user that no longer exists");
        return Ok(not_found_envelope());
    };

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
