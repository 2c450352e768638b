//! # hrstore-core
//!
//! Foundation crate for the employee record store.
//! Defines the record types, storage traits, errors, config, field
//! validation, and tracing setup. The SQLite backend in `hrstore-storage`
//! depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::HrConfig;
pub use errors::error_code::StoreErrorCode;
pub use errors::{StoreError, StoreResult, ValidationError};
pub use types::employee::{EmployeeId, EmployeePatch, EmployeeRecord, SearchCriteria};
pub use types::role::{Capability, UserAccount, UserRole};
