//! # Waduk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`app`]: application name, environment, debug flag, time zone
//! - [`cors`]: origins allowed to call the application from a browser
//! - [`database`]: relational database connection parameters
//! - [`jwt`]: API token guard settings
//! - [`logger`]: log destination and level
//! - [`session`]: browser session lifetime and cookie
//!
//! # Example
//!
//! ```ignore
//! use waduk_config::Settings;
//!
//! dotenvy::dotenv().ok();
//! let settings = Settings::from_env();
//! ```

pub mod app;
pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod logger;
pub mod session;

pub use app::AppConfig;
pub use cors::CorsConfig;
pub use database::{DatabaseConfig, Driver};
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use logger::{LogTarget, LoggerConfig};
pub use session::SessionConfig;

/// Every configuration section the application reads at startup.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub db: DatabaseConfig,
    pub jwt: JwtConfig,
    pub logger: LoggerConfig,
    pub session: SessionConfig,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            app: AppConfig::from_env(),
            cors: CorsConfig::from_env(),
            db: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            logger: LoggerConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
