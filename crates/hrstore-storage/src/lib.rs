//! # hrstore-storage
//!
//! SQLite persistence layer for employee records.
//! Connection-per-call, parameterized predicate building, partial updates,
//! and a transactional below-threshold salary update.

pub mod columns;
pub mod connection;
pub mod credentials;
pub mod engine;
pub mod mapper;
pub mod predicate;
pub mod queries;
pub mod schema;

pub use connection::EmployeeDatabase;
pub use engine::SqliteEmployeeStore;
pub use predicate::{Comparison, Filter, Predicate, PredicateBuilder, SqlParam};
