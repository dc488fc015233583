//! Token guard for API paths.
//!
//! Runs on every request but only acts on paths selected by the
//! [`PathRule`](waduk_auth::PathRule) in [`AppState`]. The token is read from
//! `Authorization: Bearer <token>` or, failing that, from the `token` cookie.
//! Accepted claims are stored as a [`DecodedToken`] request extension.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use waduk_auth::{Claims, DecodedToken, TokenError, decode_token};
use waduk_config::JwtConfig;
use waduk_core::{error_envelope, pretty_json};

use crate::state::AppState;

const TOKEN_COOKIE: &str = "token";

pub async fn jwt_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS || !state.token_paths.is_guarded(req.uri().path()) {
        return next.run(req).await;
    }

    match authenticate(req.uri(), req.headers(), &state.settings.jwt) {
        Ok(claims) => {
            req.extensions_mut().insert(DecodedToken(claims));
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!(
                security.event = "api_token_rejected",
                path = %req.uri().path(),
                reason = %err,
                "API request rejected"
            );
            pretty_json(StatusCode::UNAUTHORIZED, &error_envelope(&err.to_string()))
        }
    }
}

fn authenticate(uri: &Uri, headers: &HeaderMap, config: &JwtConfig) -> Result<Claims, TokenError> {
    if config.secure && !is_https(uri, headers) {
        let relaxed = request_host(uri, headers).is_some_and(|host| config.is_relaxed_host(&host));
        if !relaxed {
            return Err(TokenError::InsecureTransport);
        }
    }

    let token = header_token(headers)
        .or_else(|| cookie_token(headers))
        .ok_or(TokenError::Missing)?;

    decode_token(&token, config)
}

fn is_https(uri: &Uri, headers: &HeaderMap) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// Host without port, from the request target or the `Host` header.
fn request_host(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(host) = uri.host() {
        return Some(host.to_ascii_lowercase());
    }
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let host = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };
    Some(host.to_ascii_lowercase())
}

fn header_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    bearer_token(value).map(str::to_string)
}

/// Token part of a `Bearer` credential; the scheme is matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, rest) = value.trim().split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
