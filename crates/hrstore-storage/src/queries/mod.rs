//! Query modules, one per table concern.

pub mod accounts;
pub mod employees;
pub mod salaries;
