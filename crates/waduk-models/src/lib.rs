//! # Waduk Models
//!
//! Data types shared between the guards and the handlers.

pub mod users;

pub use users::{CurrentUser, Role, User};
