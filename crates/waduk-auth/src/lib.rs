//! # Waduk Auth
//!
//! Building blocks of the API token guard:
//!
//! - [`claims`]: the decoded token and its request-extension wrapper
//! - [`jwt`]: HS256 signing and verification
//! - [`path`]: which request paths require a token

pub mod claims;
pub mod jwt;
pub mod path;

pub use claims::{Claims, DecodedToken};
pub use jwt::{TokenError, create_token, decode_token};
pub use path::PathRule;
