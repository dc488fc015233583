use sqlx::PgPool;
use tower_sessions::MemoryStore;

use waduk_auth::PathRule;
use waduk_config::Settings;
use waduk_db::{DbError, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub settings: Settings,
    pub sessions: MemoryStore,
    pub token_paths: PathRule,
}

impl AppState {
    pub fn new(db: PgPool, settings: Settings) -> Self {
        let token_paths = PathRule::from_config(&settings.jwt);
        Self {
            db,
            settings,
            sessions: MemoryStore::default(),
            token_paths,
        }
    }
}

/// Connects to the database and assembles the shared state.
pub async fn init_app_state(settings: Settings) -> Result<AppState, DbError> {
    let db = init_db_pool(&settings.db).await?;
    Ok(AppState::new(db, settings))
}
