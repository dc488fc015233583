use chrono_tz::Tz;
use std::env;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub name: String,
    pub env: String,
    pub debug: bool,
    pub timezone: Tz,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            name: env::var("APP_NAME").unwrap_or_else(|_| "App".to_string()),
            env: env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            debug: env::var("APP_DEBUG").unwrap_or_else(|_| "true".to_string()) == "true",
            timezone: env::var("APP_TIMEZONE")
                .ok()
                .map(|name| parse_timezone(&name))
                .unwrap_or(DEFAULT_TIMEZONE),
            bind_addr: env::var("APP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }

    /// Whether 5xx responses may carry the underlying error text.
    pub fn display_error_details(&self) -> bool {
        !self.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "App".to_string(),
            env: "local".to_string(),
            debug: true,
            timezone: DEFAULT_TIMEZONE,
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        tracing::warn!(timezone = %name, "Unknown APP_TIMEZONE, falling back to Asia/Jakarta");
        DEFAULT_TIMEZONE
    })
}
