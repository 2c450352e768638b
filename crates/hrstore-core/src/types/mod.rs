//! Domain types shared by the store traits and the SQLite backend.

pub mod employee;
pub mod role;
