//! Shared traits used across hrstore crates.

pub mod storage;

pub use storage::{IAccountStore, IEmployeeStore};
