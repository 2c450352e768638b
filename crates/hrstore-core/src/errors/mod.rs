//! Error types for the record store.

pub mod error_code;
mod store_error;
mod validation_error;

pub use store_error::{StoreError, StoreResult};
pub use validation_error::ValidationError;
