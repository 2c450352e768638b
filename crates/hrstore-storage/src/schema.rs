//! Table definitions. Idempotent bootstrap, not a versioned migration system.

use hrstore_core::errors::{StoreError, StoreResult};
use rusqlite::Connection;

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    empid INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    phone TEXT NOT NULL DEFAULT '',
    department TEXT NOT NULL DEFAULT '',
    position TEXT NOT NULL DEFAULT '',
    salary REAL NOT NULL DEFAULT 0 CHECK (salary >= 0),
    hire_date TEXT NOT NULL DEFAULT '',
    address TEXT NOT NULL DEFAULT '',
    DOB INTEGER,
    SSN INTEGER
);

CREATE INDEX IF NOT EXISTS idx_employees_salary ON employees(salary);
CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department);

-- Credentials are argon2 PHC strings, never plaintext.
CREATE TABLE IF NOT EXISTS user_accounts (
    empid INTEGER NOT NULL,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'EMPLOYEE'
);
"#;

/// Create both tables if they do not exist.
pub fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(|e| StoreError::Query {
        message: format!("create schema: {e}"),
    })
}
