//! user_accounts table queries.

use hrstore_core::errors::{StoreError, StoreResult};
use hrstore_core::types::employee::EmployeeId;
use hrstore_core::types::role::{UserAccount, UserRole};
use rusqlite::{params, Connection, OptionalExtension};

/// An account row including the stored credential hash.
#[derive(Clone)]
pub struct AccountRecord {
    pub account: UserAccount,
    pub password_hash: String,
}

/// Look up an account by exact username.
pub fn find_account(conn: &Connection, username: &str) -> StoreResult<Option<AccountRecord>> {
    conn.prepare_cached(
        "SELECT empid, username, password, role FROM user_accounts WHERE username = ?1",
    )
    .map_err(StoreError::query)?
    .query_row(params![username], |row| {
        let role: String = row.get(3)?;
        Ok(AccountRecord {
            account: UserAccount {
                employee_id: row.get(0)?,
                username: row.get(1)?,
                role: UserRole::from_db(&role),
            },
            password_hash: row.get(2)?,
        })
    })
    .optional()
    .map_err(StoreError::query)
}

/// Insert an account. `password_hash` must already be a PHC string.
pub fn insert_account(
    conn: &Connection,
    employee_id: EmployeeId,
    username: &str,
    password_hash: &str,
    role: UserRole,
) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO user_accounts (empid, username, password, role) VALUES (?1, ?2, ?3, ?4)",
        params![employee_id, username, password_hash, role.as_db_str()],
    )
    .map_err(StoreError::query)?;
    Ok(())
}
