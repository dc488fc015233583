//! What a login leaves in the browser session.
//!
//! Two keys are written: the user id and the unix time until which the
//! login is trusted. Nothing read from the session may be used before
//! [`UserSession::is_active`] has accepted the refresh time.

use chrono::Utc;
use tower_sessions::Session;
use waduk_core::AppError;

pub const USER_ID_KEY: &str = "user_id";
pub const REFRESH_TIME_KEY: &str = "user_refresh_time";

pub struct UserSession;

impl UserSession {
    /// Starts a login for `user_id` lasting `lifetime` seconds from now.
    pub async fn establish(session: &Session, user_id: i64, lifetime: i64) -> Result<(), AppError> {
        session.cycle_id().await?;
        session.insert(USER_ID_KEY, user_id).await?;
        session
            .insert(REFRESH_TIME_KEY, Utc::now().timestamp() + lifetime)
            .await?;
        Ok(())
    }

    pub async fn user_id(session: &Session) -> Result<Option<i64>, AppError> {
        Ok(session.get::<i64>(USER_ID_KEY).await?)
    }

    pub async fn refresh_time(session: &Session) -> Result<Option<i64>, AppError> {
        Ok(session.get::<i64>(REFRESH_TIME_KEY).await?)
    }

    pub fn is_active(refresh_time: Option<i64>, now: i64) -> bool {
        matches!(refresh_time, Some(until) if until >= now)
    }

    /// Drops the session data and expires the cookie.
    pub async fn destroy(session: &Session) -> Result<(), AppError> {
        session.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_refresh_time_is_inactive() {
        assert!(!UserSession::is_active(None, 1_000));
    }

    #[test]
    fn test_past_refresh_time_is_inactive() {
        assert!(!UserSession::is_active(Some(999), 1_000));
    }

    #[test]
    fn test_current_and_future_refresh_time_is_active() {
        assert!(UserSession::is_active(Some(1_000), 1_000));
        assert!(UserSession::is_active(Some(1_001), 1_000));
    }
}
