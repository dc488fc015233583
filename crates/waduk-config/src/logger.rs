use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct LoggerConfig {
    pub name: String,
    pub target: LogTarget,
    pub level: String,
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        let docker = env::var("docker").map(|v| !v.is_empty()).unwrap_or(false);
        Self {
            name: env::var("APP_NAME").unwrap_or_else(|_| "App".to_string()),
            target: Self::target_for(docker),
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
        }
    }

    /// Containers log to stdout; everything else to `logs/app.log`.
    pub fn target_for(docker: bool) -> LogTarget {
        if docker {
            LogTarget::Stdout
        } else {
            LogTarget::File(PathBuf::from("logs").join("app.log"))
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "App".to_string(),
            target: LogTarget::Stdout,
            level: "debug".to_string(),
        }
    }
}
