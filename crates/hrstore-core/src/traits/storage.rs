//! Storage trait module.
//!
//! These traits define the contract between callers and the record
//! backend. The SQLite implementation lives in `hrstore-storage`. All
//! traits are object-safe, `Send + Sync`, and have blanket `Arc<T>` impls.

pub mod account_store;
pub mod employee_store;
pub mod test_helpers;

pub use account_store::IAccountStore;
pub use employee_store::IEmployeeStore;
pub use test_helpers::EmployeeStoreStub;
