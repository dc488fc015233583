//! Application error type and the JSON envelopes written to clients.
//!
//! Every error leaving a handler or a guard is rendered as
//!
//! ```text
//! {
//!   "status": "error",
//!   "message": "<reason>"
//! }
//! ```
//!
//! Server-side failures never leak their cause in the envelope itself. The
//! cause is logged and attached to the response as an [`ErrorDetails`]
//! extension, which the application may choose to expose outside production.

use anyhow::Error;
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

/// Underlying cause of a 5xx response, carried as a response extension.
#[derive(Debug, Clone)]
pub struct ErrorDetails(pub String);

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let details = format!("{:#}", self.error);
            tracing::error!(status = %self.status.as_u16(), error = %details, "Request failed");

            let mut response = pretty_json(self.status, &error_envelope(INTERNAL_MESSAGE));
            response.extensions_mut().insert(ErrorDetails(details));
            return response;
        }

        pretty_json(self.status, &error_envelope(&self.error.to_string()))
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

pub fn error_envelope(message: &str) -> Value {
    json!({
        "status": "error",
        "message": message,
    })
}

/// Body returned for every path no route claims.
pub fn not_found_envelope() -> Response {
    pretty_json(
        StatusCode::NOT_FOUND,
        &json!({
            "status": "404",
            "message": "endpoint not found",
            "data": [],
        }),
    )
}

/// Serializes `body` with indentation and the JSON content type.
pub fn pretty_json(status: StatusCode, body: &Value) -> Response {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    let mut response = (status, text).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_message() {
        let response = AppError::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!("Token not found."))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.extensions().get::<ErrorDetails>().is_none());
    }

    #[test]
    fn test_server_error_attaches_details() {
        let response = AppError::internal(anyhow::anyhow!("pool timed out")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let details = response.extensions().get::<ErrorDetails>().unwrap();
        assert_eq!(details.0, "pool timed out");
    }

    #[test]
    fn test_not_found_envelope_status_and_type() {
        let response = not_found_envelope();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = error_envelope("Expired token");
        assert_eq!(envelope["status"], "error");
        assert_eq!(envelope["message"], "Expired token");
    }
}
