//! User roles and the capabilities they unlock.
//!
//! Menu content is data: the console front end renders
//! `role.capabilities()` rather than dispatching on a user subtype.

use serde::{Deserialize, Serialize};

use super::employee::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Employee,
    HrAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ViewOwnRecord,
    ViewAllRecords,
    SearchRecords,
    UpdateRecords,
    BulkSalaryUpdate,
    Logout,
}

const EMPLOYEE_CAPABILITIES: &[Capability] = &[Capability::ViewOwnRecord, Capability::Logout];

const HR_ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::ViewAllRecords,
    Capability::SearchRecords,
    Capability::UpdateRecords,
    Capability::BulkSalaryUpdate,
    Capability::Logout,
];

impl UserRole {
    /// Parse the `role` column of `user_accounts`. "HR" (any case) is an
    /// admin; anything else is a regular employee.
    pub fn from_db(role: &str) -> Self {
        if role.trim().eq_ignore_ascii_case("hr") {
            Self::HrAdmin
        } else {
            Self::Employee
        }
    }

    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::HrAdmin => "HR",
        }
    }

    /// Capabilities in menu order.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::Employee => EMPLOYEE_CAPABILITIES,
            Self::HrAdmin => HR_ADMIN_CAPABILITIES,
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewOwnRecord => "View Personal Data",
            Self::ViewAllRecords => "View All Employee Data",
            Self::SearchRecords => "Search Employees",
            Self::UpdateRecords => "Update Employee",
            Self::BulkSalaryUpdate => "Raise Salaries Below Threshold",
            Self::Logout => "Logout",
        }
    }
}

/// An authenticated account. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub employee_id: EmployeeId,
    pub username: String,
    pub role: UserRole,
}
