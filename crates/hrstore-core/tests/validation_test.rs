//! Field validation: email shape, non-negative amounts, patch checks.

use hrstore_core::errors::ValidationError;
use hrstore_core::types::employee::EmployeePatch;
use hrstore_core::validation::{
    is_non_negative, is_valid_email, validate_patch, validate_threshold_update,
};
use proptest::prelude::*;

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b"));
    assert!(is_valid_email("first.last+tag@example.co.uk"));
    assert!(is_valid_email(Some("x_y-z@host")));

    assert!(!is_valid_email(""));
    assert!(!is_valid_email(None));
    assert!(!is_valid_email("noat"));
    assert!(!is_valid_email("@domain"));
    assert!(!is_valid_email("local@"));
    assert!(!is_valid_email("has space@domain"));
}

#[test]
fn non_negative_amounts() {
    assert!(is_non_negative(0.0));
    assert!(is_non_negative(4500.25));
    assert!(!is_non_negative(-0.01));
    assert!(!is_non_negative(f64::NAN));
}

#[test]
fn patch_with_bad_email_is_rejected() {
    let patch = EmployeePatch {
        email: Some("nope".into()),
        ..Default::default()
    };
    assert_eq!(
        validate_patch(&patch),
        Err(ValidationError::InvalidEmail {
            value: "nope".into()
        })
    );
}

#[test]
fn patch_with_empty_email_is_rejected() {
    let patch = EmployeePatch {
        email: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(
        validate_patch(&patch),
        Err(ValidationError::InvalidEmail { .. })
    ));
}

#[test]
fn patch_with_negative_salary_is_rejected() {
    let patch = EmployeePatch {
        salary: Some(-1.0),
        ..Default::default()
    };
    assert_eq!(
        validate_patch(&patch),
        Err(ValidationError::NegativeSalary { value: -1.0 })
    );
}

#[test]
fn patch_without_checked_fields_passes() {
    assert_eq!(validate_patch(&EmployeePatch::default()), Ok(()));
    let patch = EmployeePatch {
        salary: Some(0.0),
        address: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(validate_patch(&patch), Ok(()));
}

#[test]
fn threshold_update_preconditions() {
    assert_eq!(validate_threshold_update(5000.0, 6000.0), Ok(()));
    assert_eq!(validate_threshold_update(0.0, 0.0), Ok(()));
    assert_eq!(
        validate_threshold_update(-1.0, 6000.0),
        Err(ValidationError::InvalidThreshold { value: -1.0 })
    );
    assert_eq!(
        validate_threshold_update(5000.0, -5.0),
        Err(ValidationError::InvalidNewSalary { value: -5.0 })
    );
}

proptest! {
    #[test]
    fn anything_without_at_is_invalid(s in "[^@]*") {
        prop_assert!(!is_valid_email(s.as_str()));
    }

    #[test]
    fn simple_local_and_domain_are_valid(local in "[A-Za-z0-9+_.-]{1,16}", domain in "[a-z]{1,10}(\\.[a-z]{2,3})?") {
        let email = format!("{local}@{domain}");
        prop_assert!(is_valid_email(email.as_str()));
    }

    #[test]
    fn negative_salaries_never_validate(salary in -1.0e9..-0.0001f64) {
        let patch = EmployeePatch { salary: Some(salary), ..Default::default() };
        prop_assert!(validate_patch(&patch).is_err());
    }
}
