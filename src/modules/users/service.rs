use anyhow::Context;
use sqlx::PgPool;
use tower_sessions::Session;
use tracing::instrument;
use waduk_core::AppError;
use waduk_models::User;

use super::session::UserSession;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, role, waduk_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by ID")
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// The user whose id the session holds, if any.
    pub async fn current_user(db: &PgPool, session: &Session) -> Result<Option<User>, AppError> {
        match UserSession::user_id(session).await? {
            Some(id) => Self::find_by_id(db, id).await,
            None => Ok(None),
        }
    }
}
