//! Salary threshold queries. The bulk update rewrites every salary below
//! a cutoff atomically.

use hrstore_core::errors::{StoreError, StoreResult};
use hrstore_core::types::employee::EmployeeRecord;
use hrstore_core::validation;
use rusqlite::{params, Connection};

use super::employees::{below_threshold_filter, select_employees};

const SAVEPOINT: &str = "below_threshold_update";

/// Scoped transaction on a borrowed connection.
///
/// Starts `BEGIN IMMEDIATE` when the connection is in autocommit mode, or a
/// savepoint when the caller already has a transaction open. Dropping the
/// guard without [`TransactionGuard::commit`] rolls back. Either way the
/// connection leaves in the autocommit mode it arrived with.
pub struct TransactionGuard<'c> {
    conn: &'c Connection,
    nested: bool,
    finished: bool,
}

impl<'c> TransactionGuard<'c> {
    pub fn begin(conn: &'c Connection) -> StoreResult<Self> {
        let nested = !conn.is_autocommit();
        let sql = if nested {
            format!("SAVEPOINT {SAVEPOINT}")
        } else {
            "BEGIN IMMEDIATE".to_string()
        };
        conn.execute_batch(&sql).map_err(|e| StoreError::Query {
            message: format!("begin transaction: {e}"),
        })?;
        Ok(Self {
            conn,
            nested,
            finished: false,
        })
    }

    pub fn commit(mut self) -> StoreResult<()> {
        let sql = if self.nested {
            format!("RELEASE {SAVEPOINT}")
        } else {
            "COMMIT".to_string()
        };
        self.conn.execute_batch(&sql).map_err(|e| StoreError::Query {
            message: format!("commit: {e}"),
        })?;
        self.finished = true;
        Ok(())
    }

    fn rollback(&mut self) {
        let sql = if self.nested {
            format!("ROLLBACK TO {SAVEPOINT}; RELEASE {SAVEPOINT}")
        } else {
            "ROLLBACK".to_string()
        };
        if let Err(e) = self.conn.execute_batch(&sql) {
            tracing::warn!(error = %e, "rollback failed");
        }
        self.finished = true;
    }
}

impl Drop for TransactionGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // A failed COMMIT leaves the transaction open in SQLite; roll it back too.
            if !self.conn.is_autocommit() || self.nested {
                self.rollback();
            }
        }
    }
}

/// Set `salary = new_salary` on every row with `salary < threshold`.
///
/// Validation failures are reported before the backend is touched.
/// Returns the exact number of rows rewritten; `Ok(0)` is a success.
pub fn update_below_threshold(
    conn: &Connection,
    threshold: f64,
    new_salary: f64,
) -> StoreResult<usize> {
    validation::validate_threshold_update(threshold, new_salary)?;

    let tx = TransactionGuard::begin(conn)?;
    let rows = match conn.execute(
        "UPDATE employees SET salary = ?1 WHERE salary < ?2",
        params![new_salary, threshold],
    ) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(threshold, error = %e, "bulk salary update failed, rolling back");
            drop(tx);
            return Err(StoreError::Query {
                message: format!("update salaries below threshold: {e}"),
            });
        }
    };
    tx.commit()?;

    tracing::info!(threshold, rows, "salaries below threshold updated");
    Ok(rows)
}

/// Records with salary strictly below `threshold`.
pub fn get_below_threshold(conn: &Connection, threshold: f64) -> StoreResult<Vec<EmployeeRecord>> {
    select_employees(conn, &below_threshold_filter(threshold))
}
