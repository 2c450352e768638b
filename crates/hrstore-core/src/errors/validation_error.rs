//! Input validation failures. Raised before any statement reaches the backend.

use super::error_code::{self, StoreErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid email format: {value:?}")]
    InvalidEmail { value: String },

    #[error("salary must not be negative: {value}")]
    NegativeSalary { value: f64 },

    #[error("no fields to update")]
    EmptyUpdate,

    #[error("threshold must not be negative: {value}")]
    InvalidThreshold { value: f64 },

    #[error("new salary must not be negative: {value}")]
    InvalidNewSalary { value: f64 },
}

impl StoreErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEmail { .. } => error_code::INVALID_EMAIL,
            Self::NegativeSalary { .. } => error_code::NEGATIVE_SALARY,
            Self::EmptyUpdate => error_code::EMPTY_UPDATE,
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
            Self::InvalidNewSalary { .. } => error_code::INVALID_NEW_SALARY,
        }
    }
}
