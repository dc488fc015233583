//! Request guards.
//!
//! - [`jwt`]: token check for API paths
//! - [`session`]: logged-in check for browser routes
//! - [`role`]: petugas/admin checks, layered after the session guard
//! - [`error_details`]: exposes 5xx causes outside production
//!
//! Browser guards never answer with an error body; they redirect to
//! `/login` or `/forbidden`.

pub mod error_details;
pub mod jwt;
pub mod role;
pub mod session;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub const LOGIN_PATH: &str = "/login";
pub const FORBIDDEN_PATH: &str = "/forbidden";

/// `302 Found` to `location`.
pub fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
