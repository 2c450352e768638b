//! `EmployeeDatabase` opens a fresh connection for every operation.
//!
//! There is no pool: each store call acquires a connection inside
//! [`EmployeeDatabase::with_connection`] and the connection is dropped
//! when the closure returns, on success and on error alike.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hrstore_core::config::StoreConfig;
use hrstore_core::errors::{StoreError, StoreResult};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

/// Unicode-aware lowercase, registered on every connection. SQLite's
/// built-in `LOWER()` folds ASCII letters only.
pub const UNICODE_LOWER_FN: &str = "unicode_lower";

/// Location and open options of the employee database.
#[derive(Debug, Clone)]
pub struct EmployeeDatabase {
    path: PathBuf,
    busy_timeout: Duration,
    create_if_missing: bool,
}

impl EmployeeDatabase {
    /// Database at `path` with default options (5s busy timeout, no implicit create).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config(&StoreConfig::default()).with_path(path)
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            path: config.effective_db_path(),
            busy_timeout: config.effective_busy_timeout(),
            create_if_missing: config.effective_create_if_missing(),
        }
    }

    fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-write connection. A missing database file is a
    /// `Connection` error unless `create_if_missing` is set.
    pub fn open(&self) -> StoreResult<Connection> {
        self.open_with(self.create_if_missing)
    }

    /// Open a read-write connection, creating the file if needed.
    pub fn open_or_create(&self) -> StoreResult<Connection> {
        self.open_with(true)
    }

    fn open_with(&self, create: bool) -> StoreResult<Connection> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if create {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(&self.path, flags).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to open employee database");
            StoreError::Connection {
                message: format!("{}: {e}", self.path.display()),
            }
        })?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(StoreError::connection)?;
        register_functions(&conn)?;
        Ok(conn)
    }

    /// Run `f` on a fresh connection. The connection is closed when `f` returns.
    pub fn with_connection<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let conn = self.open()?;
        f(&conn)
    }
}

/// Register the scalar functions query text relies on.
pub fn register_functions(conn: &Connection) -> StoreResult<()> {
    conn.create_scalar_function(
        UNICODE_LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| match ctx.get_raw(0) {
            ValueRef::Null => Ok(None),
            ValueRef::Text(bytes) => Ok(Some(String::from_utf8_lossy(bytes).to_lowercase())),
            other => Err(rusqlite::Error::InvalidFunctionParameterType(
                0,
                other.data_type(),
            )),
        },
    )
    .map_err(StoreError::connection)
}
