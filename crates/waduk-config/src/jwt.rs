use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Path prefixes the token guard protects.
    pub path: Vec<String>,
    /// Path prefixes exempt from the guard even when under `path`.
    pub ignore: Vec<String>,
    /// Hosts allowed to present tokens over plain HTTP.
    pub relaxed: Vec<String>,
    /// Reject tokens sent over plain HTTP from hosts outside `relaxed`.
    pub secure: bool,
    /// Lifetime of issued tokens in seconds; always positive when loaded from the environment.
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            path: vec!["/api".to_string()],
            ignore: vec!["/api/token".to_string(), "/api/tokentest".to_string()],
            relaxed: vec!["localhost".to_string()],
            secure: true,
            token_expiry: 3600,
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("SECRET").unwrap_or_default(),
            secure: env::var("JWT_SECURE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.secure),
            token_expiry: parse_expiry(
                env::var("JWT_EXPIRY").ok().as_deref(),
                defaults.token_expiry,
            ),
            ..defaults
        }
    }

    pub fn is_relaxed_host(&self, host: &str) -> bool {
        self.relaxed.iter().any(|relaxed| relaxed == host)
    }
}

/// Non-numeric and non-positive values fall back to `default`.
fn parse_expiry(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|seconds| *seconds > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_guard_api() {
        let config = JwtConfig::default();
        assert_eq!(config.path, vec!["/api"]);
        assert!(config.ignore.contains(&"/api/token".to_string()));
        assert!(config.ignore.contains(&"/api/tokentest".to_string()));
        assert!(config.secure);
    }

    #[test]
    fn test_relaxed_host() {
        let config = JwtConfig::default();
        assert!(config.is_relaxed_host("localhost"));
        assert!(!config.is_relaxed_host("waduk.example.id"));
    }

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry(Some("600"), 3600), 600);
        assert_eq!(parse_expiry(Some("0"), 3600), 3600);
        assert_eq!(parse_expiry(Some("-1"), 3600), 3600);
        assert_eq!(parse_expiry(Some("soon"), 3600), 3600);
        assert_eq!(parse_expiry(None, 3600), 3600);
    }
}
