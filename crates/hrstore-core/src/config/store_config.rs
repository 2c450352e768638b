//! Backend connection configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the database file. Default: "employeeData.db".
    pub db_path: Option<String>,
    /// How long a connection waits on a locked database, in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
    /// Create the database file when it does not exist. Default: false.
    pub create_if_missing: Option<bool>,
}

impl StoreConfig {
    /// Returns the effective database path, defaulting to `employeeData.db`.
    pub fn effective_db_path(&self) -> PathBuf {
        PathBuf::from(self.db_path.as_deref().unwrap_or("employeeData.db"))
    }

    /// Returns the effective busy timeout, defaulting to 5 seconds.
    pub fn effective_busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(5000))
    }

    /// Returns whether a missing database file may be created, defaulting to false.
    pub fn effective_create_if_missing(&self) -> bool {
        self.create_if_missing.unwrap_or(false)
    }
}
