use std::env;

use crate::error::ConfigError;

/// Database drivers the application can talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    Postgres,
}

impl Driver {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => Ok(Driver::Postgres),
            _ => Err(ConfigError::UnsupportedDriver(name.to_string())),
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            Driver::Postgres => "postgres",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Driver::Postgres => 5432,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DatabaseConfig {
    pub connection: String,
    pub host: String,
    pub port: Option<u16>,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            connection: env::var("DB_CONNECTION").unwrap_or_else(|_| "pgsql".to_string()),
            host: env::var("DB_HOST").unwrap_or_default(),
            port: env::var("DB_PORT").ok().and_then(|s| s.parse().ok()),
            database: env::var("DB_DATABASE").unwrap_or_default(),
            username: env::var("DB_USERNAME").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
        }
    }

    pub fn driver(&self) -> Result<Driver, ConfigError> {
        Driver::parse(&self.connection)
    }

    pub fn port(&self) -> Result<u16, ConfigError> {
        Ok(self.port.unwrap_or(self.driver()?.default_port()))
    }

    /// Checks that everything needed to open a connection is present.
    pub fn validate(&self) -> Result<Driver, ConfigError> {
        let driver = self.driver()?;
        if self.host.is_empty() {
            return Err(ConfigError::Missing("DB_HOST"));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Missing("DB_DATABASE"));
        }
        Ok(driver)
    }

    /// Connection string with the password masked, for log lines.
    pub fn redacted_dsn(&self) -> Result<String, ConfigError> {
        let driver = self.validate()?;
        Ok(format!(
            "{}://{}:***@{}:{}/{}",
            driver.scheme(),
            self.username,
            self.host,
            self.port()?,
            self.database
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(connection: &str) -> DatabaseConfig {
        DatabaseConfig {
            connection: connection.to_string(),
            host: "db".to_string(),
            port: None,
            database: "waduk".to_string(),
            username: "operator".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[test]
    fn test_driver_aliases() {
        assert_eq!(Driver::parse("pgsql"), Ok(Driver::Postgres));
        assert_eq!(Driver::parse("Postgres"), Ok(Driver::Postgres));
        assert_eq!(Driver::parse("postgresql"), Ok(Driver::Postgres));
        assert_eq!(
            Driver::parse("mysql"),
            Err(ConfigError::UnsupportedDriver("mysql".to_string()))
        );
    }

    #[test]
    fn test_default_port() {
        assert_eq!(config("pgsql").port(), Ok(5432));

        let mut custom = config("pgsql");
        custom.port = Some(6543);
        assert_eq!(custom.port(), Ok(6543));
    }

    #[test]
    fn test_redacted_dsn_hides_password() {
        let dsn = config("pgsql").redacted_dsn().unwrap();
        assert_eq!(dsn, "postgres://operator:***@db:5432/waduk");
        assert!(!dsn.contains("s3cret"));
    }

    #[test]
    fn test_missing_host() {
        let mut missing = config("pgsql");
        missing.host.clear();
        assert_eq!(missing.validate(), Err(ConfigError::Missing("DB_HOST")));
    }

    #[test]
    fn test_missing_database() {
        let mut missing = config("pgsql");
        missing.database.clear();
        assert_eq!(missing.validate(), Err(ConfigError::Missing("DB_DATABASE")));
    }
}
