//! Field validation. Pure functions, no I/O.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::types::employee::EmployeePatch;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(.+)$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// `local@domain` shape check. `None` and the empty string are invalid.
///
/// ```
/// use hrstore_core::validation::is_valid_email;
/// assert!(is_valid_email("a@b"));
/// assert!(!is_valid_email("noat"));
/// assert!(!is_valid_email(None));
/// ```
pub fn is_valid_email<'a>(email: impl Into<Option<&'a str>>) -> bool {
    match email.into() {
        Some(e) if !e.is_empty() => email_regex().is_some_and(|re| re.is_match(e)),
        _ => false,
    }
}

/// True for zero and positive values. NaN is rejected.
pub fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

/// Check the supplied fields of a patch, email first. Does not check
/// emptiness or existence; the store does both before calling this.
pub fn validate_patch(patch: &EmployeePatch) -> Result<(), ValidationError> {
    if let Some(email) = &patch.email {
        if !is_valid_email(email.as_str()) {
            return Err(ValidationError::InvalidEmail {
                value: email.clone(),
            });
        }
    }
    if let Some(salary) = patch.salary {
        if !is_non_negative(salary) {
            return Err(ValidationError::NegativeSalary { value: salary });
        }
    }
    Ok(())
}

/// Preconditions of the below-threshold bulk update.
pub fn validate_threshold_update(threshold: f64, new_salary: f64) -> Result<(), ValidationError> {
    if !is_non_negative(threshold) {
        return Err(ValidationError::InvalidThreshold { value: threshold });
    }
    if !is_non_negative(new_salary) {
        return Err(ValidationError::InvalidNewSalary { value: new_salary });
    }
    Ok(())
}
