//! HTTP client module with status classification and error handling.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{ApiError, check_status, classify_error};
