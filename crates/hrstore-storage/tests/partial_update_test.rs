//! update_record: supplied fields change, everything else stays put.

mod common;

use common::{employee, seeded_store};
use hrstore_core::errors::{StoreError, ValidationError};
use hrstore_core::traits::storage::IEmployeeStore;
use hrstore_core::types::employee::EmployeePatch;
use hrstore_core::StoreErrorCode;
use hrstore_storage::{EmployeeDatabase, SqliteEmployeeStore};

#[test]
fn supplied_fields_change_and_others_are_kept() {
    let mut before = employee(1, "Ada", "Lovelace", "Engineering", 4000.0);
    before.dob = Some(10121815);
    let (_dir, store) = seeded_store(&[before.clone()]);

    let patch = EmployeePatch {
        email: Some("ada@analytical.engine".to_string()),
        position: Some("Lead".to_string()),
        salary: Some(5200.0),
        ..Default::default()
    };
    store.update_record(1, &patch).unwrap();

    let mut expected = before;
    patch.apply_to(&mut expected);
    let after = store.fetch_by_id(1).unwrap().unwrap();
    assert_eq!(after, expected);
    assert_eq!(after.first_name, "Ada");
    assert_eq!(after.department, "Engineering");
    assert_eq!(after.dob, Some(10121815));
}

#[test]
fn other_records_are_untouched() {
    let (_dir, store) = seeded_store(&[
        employee(1, "Ada", "Lovelace", "Engineering", 4000.0),
        employee(2, "Grace", "Hopper", "Engineering", 4000.0),
    ]);
    let grace = store.fetch_by_id(2).unwrap();

    let patch = EmployeePatch {
        department: Some("Research".to_string()),
        ..Default::default()
    };
    store.update_record(1, &patch).unwrap();

    assert_eq!(store.fetch_by_id(2).unwrap(), grace);
}

#[test]
fn zero_salary_and_empty_text_are_supplied_values() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);

    let patch = EmployeePatch {
        salary: Some(0.0),
        address: Some(String::new()),
        ..Default::default()
    };
    store.update_record(1, &patch).unwrap();

    let after = store.fetch_by_id(1).unwrap().unwrap();
    assert_eq!(after.salary, 0.0);
    assert_eq!(after.address, "");
}

#[test]
fn without_blanks_keeps_console_skip_semantics() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);

    let patch = EmployeePatch {
        first_name: Some(String::new()),
        phone: Some("555-0199".to_string()),
        ..Default::default()
    }
    .without_blanks();
    store.update_record(1, &patch).unwrap();

    let after = store.fetch_by_id(1).unwrap().unwrap();
    assert_eq!(after.first_name, "Ada");
    assert_eq!(after.phone, "555-0199");
}

#[test]
fn unknown_id_is_not_found() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        phone: Some("555-0199".to_string()),
        ..Default::default()
    };

    let err = store.update_record(77, &patch).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 77 }), "got {err:?}");
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[test]
fn missing_record_is_reported_before_field_checks() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        email: Some("bad".to_string()),
        salary: Some(-5.0),
        ..Default::default()
    };

    let err = store.update_record(99, &patch).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 99 }), "got {err:?}");
}

#[test]
fn email_is_checked_before_salary() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        email: Some("bad".to_string()),
        salary: Some(-5.0),
        ..Default::default()
    };

    let err = store.update_record(1, &patch).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidEmail { .. })
    ));
}

#[test]
fn invalid_email_is_rejected_and_nothing_changes() {
    let before = employee(1, "Ada", "Lovelace", "Engineering", 4000.0);
    let (_dir, store) = seeded_store(&[before.clone()]);

    let patch = EmployeePatch {
        email: Some("not-an-email".to_string()),
        phone: Some("555-0199".to_string()),
        ..Default::default()
    };
    let err = store.update_record(1, &patch).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidEmail { .. })
    ));
    assert_eq!(store.fetch_by_id(1).unwrap(), Some(before));
}

#[test]
fn supplied_empty_email_is_rejected() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        email: Some(String::new()),
        ..Default::default()
    };
    let err = store.update_record(1, &patch).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn negative_salary_is_rejected() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        salary: Some(-1.0),
        ..Default::default()
    };
    let err = store.update_record(1, &patch).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NegativeSalary { value }) if value == -1.0
    ));
    assert_eq!(store.fetch_by_id(1).unwrap().unwrap().salary, 4000.0);
}

#[test]
fn empty_patch_is_validation_error() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let err = store.update_record(1, &EmployeePatch::default()).unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::EmptyUpdate)));
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn empty_patch_never_touches_the_backend() {
    // No database file at all: reaching the backend would be a Connection error.
    let dir = tempfile::TempDir::new().unwrap();
    let store = SqliteEmployeeStore::new(EmployeeDatabase::new(dir.path().join("absent.db")));

    let err = store.update_record(1, &EmployeePatch::default()).unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::EmptyUpdate)));

    let blank = EmployeePatch {
        first_name: Some("   ".to_string()),
        ..Default::default()
    }
    .without_blanks();
    let err = store.update_record(1, &blank).unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::EmptyUpdate)));
}

#[test]
fn dob_and_ssn_can_be_supplied() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let patch = EmployeePatch {
        dob: Some(1011990),
        ssn: Some(987654321),
        ..Default::default()
    };
    store.update_record(1, &patch).unwrap();

    assert_eq!(store.search_by_ssn(987654321).unwrap().len(), 1);
    assert_eq!(store.search_by_dob(1011990).unwrap().len(), 1);
}

#[test]
fn hostile_text_is_stored_verbatim() {
    let (_dir, store) = seeded_store(&[employee(1, "Ada", "Lovelace", "Engineering", 4000.0)]);
    let hostile = "x'; DROP TABLE employees; --";
    let patch = EmployeePatch {
        address: Some(hostile.to_string()),
        ..Default::default()
    };
    store.update_record(1, &patch).unwrap();

    assert_eq!(store.fetch_by_id(1).unwrap().unwrap().address, hostile);
}
