//! Column whitelist for the `employees` table.
//!
//! Query text only ever contains names produced here, never caller input.

/// A column of `employees`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeColumn {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    Salary,
    HireDate,
    Address,
    Dob,
    Ssn,
}

impl EmployeeColumn {
    /// All columns, in `SELECT_COLUMNS` order.
    pub const ALL: [EmployeeColumn; 12] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Department,
        Self::Position,
        Self::Salary,
        Self::HireDate,
        Self::Address,
        Self::Dob,
        Self::Ssn,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "empid",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Position => "position",
            Self::Salary => "salary",
            Self::HireDate => "hire_date",
            Self::Address => "address",
            Self::Dob => "DOB",
            Self::Ssn => "SSN",
        }
    }
}

/// Select list matching `EmployeeColumn::ALL`; the mapper reads by index.
pub const SELECT_COLUMNS: &str = "empid, first_name, last_name, email, phone, department, \
     position, salary, hire_date, address, DOB, SSN";
