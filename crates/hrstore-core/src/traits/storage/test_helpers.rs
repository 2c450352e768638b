//! `EmployeeStoreStub`: in-memory test double for `IEmployeeStore`.
//!
//! Used by front-end tests that need a store without a database file.
//! Follows the same validation and matching rules as the SQLite backend.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::{StoreError, StoreResult, ValidationError};
use crate::types::employee::{EmployeeId, EmployeePatch, EmployeeRecord, SearchCriteria};
use crate::validation;

use super::employee_store::IEmployeeStore;

/// In-memory stub implementation of `IEmployeeStore`, keyed by id.
#[derive(Default)]
pub struct EmployeeStoreStub {
    records: Mutex<BTreeMap<EmployeeId, EmployeeRecord>>,
    fail_next_write: Mutex<bool>,
}

impl EmployeeStoreStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let stub = Self::new();
        for r in records {
            stub.insert(r);
        }
        stub
    }

    pub fn insert(&self, record: EmployeeRecord) {
        self.lock().insert(record.id, record);
    }

    /// Make the next mutating call fail with a `Query` error and leave data untouched.
    pub fn fail_next_write(&self) {
        *self
            .fail_next_write
            .lock()
            .unwrap_or_else(|p| p.into_inner()) = true;
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<EmployeeId, EmployeeRecord>> {
        self.records.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn take_failure(&self) -> StoreResult<()> {
        let mut flag = self
            .fail_next_write
            .lock()
            .unwrap_or_else(|p| p.into_inner());
        if std::mem::take(&mut *flag) {
            return Err(StoreError::Query {
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn filter(&self, pred: impl Fn(&EmployeeRecord) -> bool) -> Vec<EmployeeRecord> {
        self.lock().values().filter(|r| pred(r)).cloned().collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl IEmployeeStore for EmployeeStoreStub {
    fn fetch_by_id(&self, id: EmployeeId) -> StoreResult<Option<EmployeeRecord>> {
        Ok(self.lock().get(&id).cloned())
    }

    fn search_by_id(&self, id: EmployeeId) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.fetch_by_id(id)?.into_iter().collect())
    }

    fn search_by_name(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| {
            first_name.map_or(true, |f| contains_ci(&r.first_name, f))
                && last_name.map_or(true, |l| contains_ci(&r.last_name, l))
        }))
    }

    fn search_by_department(&self, department: &str) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| contains_ci(&r.department, department)))
    }

    fn search_by_email(&self, email: &str) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| r.email.to_lowercase() == email.to_lowercase()))
    }

    fn search_by_dob(&self, dob: i64) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| r.dob == Some(dob)))
    }

    fn search_by_ssn(&self, ssn: i64) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| r.ssn == Some(ssn)))
    }

    fn search_by_criteria(&self, c: &SearchCriteria) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| {
            c.department.as_deref().map_or(true, |d| contains_ci(&r.department, d))
                && c.salary_min.map_or(true, |min| r.salary >= min)
                && c.salary_max.map_or(true, |max| r.salary <= max)
                && c.first_name.as_deref().map_or(true, |f| contains_ci(&r.first_name, f))
                && c.last_name.as_deref().map_or(true, |l| contains_ci(&r.last_name, l))
        }))
    }

    fn update_record(&self, id: EmployeeId, patch: &EmployeePatch) -> StoreResult<()> {
        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate.into());
        }
        if !self.lock().contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        validation::validate_patch(patch)?;
        self.take_failure()?;
        let mut records = self.lock();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        patch.apply_to(record);
        Ok(())
    }

    fn get_below_threshold(&self, threshold: f64) -> StoreResult<Vec<EmployeeRecord>> {
        Ok(self.filter(|r| r.salary < threshold))
    }

    fn update_below_threshold(&self, threshold: f64, new_salary: f64) -> StoreResult<usize> {
        validation::validate_threshold_update(threshold, new_salary)?;
        self.take_failure()?;
        let mut count = 0;
        for record in self.lock().values_mut() {
            if record.salary < threshold {
                record.salary = new_salary;
                count += 1;
            }
        }
        Ok(count)
    }
}
