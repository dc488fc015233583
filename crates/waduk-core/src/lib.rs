//! # Waduk Core
//!
//! Foundational types shared by the waduk crates:
//!
//! - [`errors`]: the application error type and the JSON envelopes
//! - [`format`]: Indonesian date formatting helpers

pub mod errors;
pub mod format;

pub use errors::{AppError, ErrorDetails, error_envelope, not_found_envelope, pretty_json};
pub use format::{month_name, tanggal_format, tanggal_format_datetime};
