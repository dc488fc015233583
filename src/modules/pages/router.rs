use axum::{Router, routing::get};

use super::controller::{forbidden_page, login_page, test_page};
use crate::middleware::{FORBIDDEN_PATH, LOGIN_PATH};
use crate::state::AppState;

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/test", get(test_page))
        .route(LOGIN_PATH, get(login_page))
        .route(FORBIDDEN_PATH, get(forbidden_page))
}
