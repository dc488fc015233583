use std::env;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Seconds a login stays valid.
    pub lifetime: i64,
    pub cookie_name: String,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime: 7200,
            cookie_name: "waduk_session".to_string(),
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            lifetime: env::var("SESSION_LIFETIME")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7200),
            cookie_name: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "waduk_session".to_string()),
            secure_cookie: env::var("APP_ENV").map(|v| v == "production").unwrap_or(false),
        }
    }
}
