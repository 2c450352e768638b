//! `IEmployeeStore`: the employee record access surface.
//!
//! Everything a caller (console menu, future API) may do with employee
//! records goes through this trait. There is no create or delete: the
//! access layer only reads, partially updates, and bulk-updates salaries.

use std::sync::Arc;

use crate::errors::StoreResult;
use crate::types::employee::{EmployeeId, EmployeePatch, EmployeeRecord, SearchCriteria};

/// Employee record access.
///
/// Every method opens its own backend connection and releases it before
/// returning. Searches return an empty `Vec` when nothing matches.
pub trait IEmployeeStore: Send + Sync {
    /// Single-row lookup. `Ok(None)` when the id is absent.
    fn fetch_by_id(&self, id: EmployeeId) -> StoreResult<Option<EmployeeRecord>>;

    /// Lookup by id as a search: zero or one record.
    fn search_by_id(&self, id: EmployeeId) -> StoreResult<Vec<EmployeeRecord>>;

    /// Case-insensitive substring match on whichever names are supplied.
    /// Supplying neither matches every record.
    fn search_by_name(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> StoreResult<Vec<EmployeeRecord>>;

    /// Case-insensitive substring match on department.
    fn search_by_department(&self, department: &str) -> StoreResult<Vec<EmployeeRecord>>;

    /// Case-insensitive exact match on email.
    fn search_by_email(&self, email: &str) -> StoreResult<Vec<EmployeeRecord>>;

    /// Exact match on the DDMMYYYY-encoded date of birth.
    fn search_by_dob(&self, dob: i64) -> StoreResult<Vec<EmployeeRecord>>;

    /// Exact match on the national id.
    fn search_by_ssn(&self, ssn: i64) -> StoreResult<Vec<EmployeeRecord>>;

    /// Conjunction of every supplied criterion.
    fn search_by_criteria(&self, criteria: &SearchCriteria) -> StoreResult<Vec<EmployeeRecord>>;

    /// Apply a partial update to one record.
    fn update_record(&self, id: EmployeeId, patch: &EmployeePatch) -> StoreResult<()>;

    /// Records with salary strictly below `threshold`.
    fn get_below_threshold(&self, threshold: f64) -> StoreResult<Vec<EmployeeRecord>>;

    /// Set every salary strictly below `threshold` to `new_salary`, atomically.
    /// Returns the number of rows rewritten; `Ok(0)` is a success.
    fn update_below_threshold(&self, threshold: f64, new_salary: f64) -> StoreResult<usize>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: IEmployeeStore + ?Sized> IEmployeeStore for Arc<T> {
    fn fetch_by_id(&self, id: EmployeeId) -> StoreResult<Option<EmployeeRecord>> {
        (**self).fetch_by_id(id)
    }
    fn search_by_id(&self, id: EmployeeId) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_id(id)
    }
    fn search_by_name(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_name(first_name, last_name)
    }
    fn search_by_department(&self, department: &str) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_department(department)
    }
    fn search_by_email(&self, email: &str) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_email(email)
    }
    fn search_by_dob(&self, dob: i64) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_dob(dob)
    }
    fn search_by_ssn(&self, ssn: i64) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_ssn(ssn)
    }
    fn search_by_criteria(&self, criteria: &SearchCriteria) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).search_by_criteria(criteria)
    }
    fn update_record(&self, id: EmployeeId, patch: &EmployeePatch) -> StoreResult<()> {
        (**self).update_record(id, patch)
    }
    fn get_below_threshold(&self, threshold: f64) -> StoreResult<Vec<EmployeeRecord>> {
        (**self).get_below_threshold(threshold)
    }
    fn update_below_threshold(&self, threshold: f64, new_salary: f64) -> StoreResult<usize> {
        (**self).update_below_threshold(threshold, new_salary)
    }
}
