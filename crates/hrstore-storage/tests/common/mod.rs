//! Shared fixtures: file-backed temp databases seeded through the
//! provisioning queries. Each store call opens its own connection, so
//! in-memory databases would not be shared across calls.

#![allow(dead_code)]

use hrstore_core::types::employee::EmployeeRecord;
use hrstore_storage::queries::employees::insert_employee;
use hrstore_storage::{EmployeeDatabase, SqliteEmployeeStore};
use tempfile::TempDir;

pub fn temp_store() -> (TempDir, SqliteEmployeeStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteEmployeeStore::new(EmployeeDatabase::new(dir.path().join("employees.db")));
    store.initialize().unwrap();
    (dir, store)
}

pub fn employee(id: i64, first: &str, last: &str, department: &str, salary: f64) -> EmployeeRecord {
    EmployeeRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "555-0100".to_string(),
        department: department.to_string(),
        position: "Analyst".to_string(),
        salary,
        hire_date: "2020-01-15".to_string(),
        address: "1 Main St".to_string(),
        dob: None,
        ssn: None,
    }
}

pub fn seed(store: &SqliteEmployeeStore, records: &[EmployeeRecord]) {
    store
        .with_connection(|conn| {
            for r in records {
                insert_employee(conn, r)?;
            }
            Ok(())
        })
        .unwrap();
}

pub fn seeded_store(records: &[EmployeeRecord]) -> (TempDir, SqliteEmployeeStore) {
    let (dir, store) = temp_store();
    seed(&store, records);
    (dir, store)
}

pub fn ids(records: &[EmployeeRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}
