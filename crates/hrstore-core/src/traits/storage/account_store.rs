//! `IAccountStore`: credential verification against `user_accounts`.

use std::sync::Arc;

use crate::errors::StoreResult;
use crate::types::role::UserAccount;

pub trait IAccountStore: Send + Sync {
    /// Verify a username/password pair.
    ///
    /// `Ok(None)` covers both an unknown username and a wrong password so
    /// callers cannot tell them apart.
    fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<UserAccount>>;
}

impl<T: IAccountStore + ?Sized> IAccountStore for Arc<T> {
    fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<UserAccount>> {
        (**self).authenticate(username, password)
    }
}
