//! Logger setup and per-request logging.
//!
//! Logs go to stdout when running in a container (`docker` set) and to
//! `logs/app.log` otherwise. Every request runs inside a span carrying the
//! application name and a short unique id, so all events emitted while
//! handling it can be correlated.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, anyhow};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use waduk_config::{LogTarget, LoggerConfig};

use crate::state::AppState;

const UID_LENGTH: usize = 7;

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered lines are lost on exit.
pub fn init_tracing(config: &LoggerConfig) -> anyhow::Result<WorkerGuard> {
    let (writer, guard, ansi) = match &config.target {
        LogTarget::Stdout => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            (writer, guard, true)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;

            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, false)
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},tower_http=warn,hyper=warn,sqlx=warn",
            config.level
        ))
    });

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(logger = %config.name, destination = ?config.target, "Logging initialized");
    Ok(guard)
}

fn request_uid() -> String {
    let mut uid = uuid::Uuid::new_v4().simple().to_string();
    uid.truncate(UID_LENGTH);
    uid
}

pub async fn logging_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "request",
        app = %state.settings.logger.name,
        uid = %request_uid(),
    );

    async move {
        info!(method = %method, path = %path, "Incoming request");

        let response = next.run(req).await;
        let latency = start.elapsed();
        let status = response.status();

        match status.as_u16() {
            400..=499 => {
                warn!(
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Client error"
                );
            }
            500..=599 => {
                error!(
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Server error"
                );
            }
            _ => {
                info!(
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
            }
        }

        response
    }
    .instrument(span)
    .await
}
