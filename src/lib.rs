//! # Waduk
//!
//! Bootstrap of the reservoir operations web application: the shared
//! state, the request guards and the router that puts them together.
//!
//! ## Request flow
//!
//! ```text
//! request logging
//!   └─ CORS
//!      └─ error-detail exposure (outside production)
//!         └─ browser session
//!            └─ API token guard (paths under /api, except /api/token*)
//!               └─ router
//!                    ├─ /test, /login, /forbidden
//!                    ├─ /api/*        caller-supplied, token protected
//!                    ├─ member        session guard
//!                    ├─ petugas       session guard, then role 2
//!                    ├─ admin         session guard, then role 1
//!                    └─ fallback      JSON 404 envelope
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! APP_NAME=App
//! APP_ENV=local            # "production" hides error details
//! APP_DEBUG=true
//! APP_TIMEZONE=Asia/Jakarta
//! DB_CONNECTION=pgsql
//! DB_HOST=127.0.0.1
//! DB_PORT=5432
//! DB_DATABASE=waduk
//! DB_USERNAME=waduk
//! DB_PASSWORD=secret
//! SECRET=change-me         # HS256 key for API tokens
//! ALLOWED_ORIGINS=http://localhost:8080
//! docker=                  # non-empty: log to stdout instead of logs/app.log
//! ```
//!
//! ## Modules
//!
//! - [`logging`]: logger factory and request logging
//! - [`middleware`]: token, session and role guards
//! - [`modules`]: pages and the current-user lookup
//! - [`router`]: route groups and layer ordering
//! - [`state`]: shared application state

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use waduk_auth;
pub use waduk_config;
pub use waduk_core;
pub use waduk_db;
pub use waduk_models;
