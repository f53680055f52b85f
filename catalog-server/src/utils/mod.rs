//! Utility module - common types and helpers
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`AppJson`] - validating JSON extractor
//! - logging setup

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
pub use validation::AppJson;
