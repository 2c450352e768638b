//! `SqliteEmployeeStore`: the record store façade.
//!
//! Implements `IEmployeeStore` and `IAccountStore` on top of
//! [`EmployeeDatabase`]. Every trait method opens its own connection via
//! `with_connection()`, composes the predicate builder, field validation
//! and record mapper, and drops the connection before returning.
//!
//! Concurrency: there is no in-process locking. Two concurrent
//! `update_record` calls on the same id are each a single UPDATE
//! statement, but nothing orders them; when they supply different columns
//! the stored row can end up with columns from both. Only the bulk salary
//! update runs in an explicit transaction.

use hrstore_core::config::StoreConfig;
use hrstore_core::errors::{StoreError, StoreResult, ValidationError};
use hrstore_core::traits::storage::{IAccountStore, IEmployeeStore};
use hrstore_core::types::employee::{EmployeeId, EmployeePatch, EmployeeRecord, SearchCriteria};
use hrstore_core::types::role::UserAccount;
use hrstore_core::validation;

use crate::connection::EmployeeDatabase;
use crate::credentials;
use crate::mapper::patch_assignments;
use crate::predicate::Filter;
use crate::queries::{accounts, employees, salaries};
use crate::schema;

/// SQLite-backed employee record store.
#[derive(Debug, Clone)]
pub struct SqliteEmployeeStore {
    db: EmployeeDatabase,
}

impl SqliteEmployeeStore {
    pub fn new(db: EmployeeDatabase) -> Self {
        Self { db }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(EmployeeDatabase::from_config(config))
    }

    /// Create the database file if needed and bootstrap both tables.
    /// Idempotent.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.db.open_or_create()?;
        schema::ensure_schema(&conn)?;
        tracing::info!(path = %self.db.path().display(), "employee database initialized");
        Ok(())
    }

    pub fn database(&self) -> &EmployeeDatabase {
        &self.db
    }

    /// Raw connection access, for provisioning and maintenance not covered
    /// by a trait method.
    pub fn with_connection<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> StoreResult<T>,
    {
        self.db.with_connection(f)
    }

    fn search(&self, filter: Filter) -> StoreResult<Vec<EmployeeRecord>> {
        self.db
            .with_connection(|conn| employees::select_employees(conn, &filter))
    }
}

impl IEmployeeStore for SqliteEmployeeStore {
    fn fetch_by_id(&self, id: EmployeeId) -> StoreResult<Option<EmployeeRecord>> {
        self.db.with_connection(|conn| employees::get_employee(conn, id))
    }

    fn search_by_id(&self, id: EmployeeId) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::id_filter(id))
    }

    fn search_by_name(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::name_filter(first_name, last_name))
    }

    fn search_by_department(&self, department: &str) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::department_filter(department))
    }

    fn search_by_email(&self, email: &str) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::email_filter(email))
    }

    fn search_by_dob(&self, dob: i64) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::dob_filter(dob))
    }

    fn search_by_ssn(&self, ssn: i64) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::ssn_filter(ssn))
    }

    fn search_by_criteria(&self, criteria: &SearchCriteria) -> StoreResult<Vec<EmployeeRecord>> {
        self.search(employees::criteria_filter(criteria))
    }

    fn update_record(&self, id: EmployeeId, patch: &EmployeePatch) -> StoreResult<()> {
        // An empty patch never opens a connection.
        let assignments = patch_assignments(patch);
        if assignments.is_empty() {
            tracing::warn!(id, "rejected employee update with no fields");
            return Err(ValidationError::EmptyUpdate.into());
        }

        self.db.with_connection(|conn| {
            if !employees::employee_exists(conn, id)? {
                return Err(StoreError::NotFound { id });
            }
            if let Err(e) = validation::validate_patch(patch) {
                tracing::warn!(id, error = %e, "rejected employee update");
                return Err(e.into());
            }

            match employees::update_employee(conn, id, &assignments)? {
                1 => {
                    tracing::info!(id, fields = assignments.len(), "employee updated");
                    Ok(())
                }
                // Deleted between the existence check and the update.
                0 => Err(StoreError::NotFound { id }),
                n => Err(StoreError::Query {
                    message: format!("update of employee {id} affected {n} rows"),
                }),
            }
        })
    }

    fn get_below_threshold(&self, threshold: f64) -> StoreResult<Vec<EmployeeRecord>> {
        self.db
            .with_connection(|conn| salaries::get_below_threshold(conn, threshold))
    }

    fn update_below_threshold(&self, threshold: f64, new_salary: f64) -> StoreResult<usize> {
        if let Err(e) = validation::validate_threshold_update(threshold, new_salary) {
            tracing::warn!(threshold, new_salary, error = %e, "rejected bulk salary update");
            return Err(e.into());
        }
        self.db
            .with_connection(|conn| salaries::update_below_threshold(conn, threshold, new_salary))
    }
}

impl IAccountStore for SqliteEmployeeStore {
    fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<UserAccount>> {
        let record = self
            .db
            .with_connection(|conn| accounts::find_account(conn, username))?;

        match record {
            Some(r) if credentials::verify_password(password, &r.password_hash) => {
                tracing::info!(username, role = ?r.account.role, "login succeeded");
                Ok(Some(r.account))
            }
            _ => {
                tracing::info!(username, "login rejected");
                Ok(None)
            }
        }
    }
}
