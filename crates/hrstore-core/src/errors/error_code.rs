//! Stable error codes surfaced to callers (console, future API).

pub const CONNECTION_ERROR: &str = "CONNECTION_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const QUERY_ERROR: &str = "QUERY_ERROR";

pub const INVALID_EMAIL: &str = "VALIDATION_INVALID_EMAIL";
pub const NEGATIVE_SALARY: &str = "VALIDATION_NEGATIVE_SALARY";
pub const EMPTY_UPDATE: &str = "VALIDATION_EMPTY_UPDATE";
pub const INVALID_THRESHOLD: &str = "VALIDATION_INVALID_THRESHOLD";
pub const INVALID_NEW_SALARY: &str = "VALIDATION_INVALID_NEW_SALARY";

/// Maps an error to a stable string code.
pub trait StoreErrorCode {
    fn error_code(&self) -> &'static str;
}
