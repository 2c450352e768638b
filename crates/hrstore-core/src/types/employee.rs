//! The employee record, its partial-update form, and multi-criteria search input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary key of the `employees` table.
pub type EmployeeId = i64;

/// One row of the `employees` table.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
    pub address: String,
    /// Date of birth encoded as DDMMYYYY. No calendar check is applied.
    pub dob: Option<i64>,
    /// National id, digits only.
    pub ssn: Option<i64>,
}

impl EmployeeRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// SSN stays out of logs and debug dumps.
impl fmt::Debug for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeRecord")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("department", &self.department)
            .field("position", &self.position)
            .field("salary", &self.salary)
            .field("hire_date", &self.hire_date)
            .field("address", &self.address)
            .field("dob", &self.dob)
            .field("ssn", &self.ssn.map(|_| "<redacted>"))
            .finish()
    }
}

/// A partial update. `Some` marks a field as supplied; `None` leaves the
/// stored value untouched. The identifier is not part of the patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub address: Option<String>,
    pub dob: Option<i64>,
    pub ssn: Option<i64>,
}

impl EmployeePatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.salary.is_none()
            && self.hire_date.is_none()
            && self.address.is_none()
            && self.dob.is_none()
            && self.ssn.is_none()
    }

    /// Treat blank text as "not supplied".
    ///
    /// For console input, where pressing enter on a prompt means "keep the
    /// current value". Numeric fields are left as they are.
    pub fn without_blanks(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        Self {
            first_name: keep(self.first_name),
            last_name: keep(self.last_name),
            email: keep(self.email),
            phone: keep(self.phone),
            department: keep(self.department),
            position: keep(self.position),
            salary: self.salary,
            hire_date: keep(self.hire_date),
            address: keep(self.address),
            dob: self.dob,
            ssn: self.ssn,
        }
    }

    /// Apply the supplied fields onto `record`, in memory.
    pub fn apply_to(&self, record: &mut EmployeeRecord) {
        if let Some(v) = &self.first_name {
            record.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            record.last_name = v.clone();
        }
        if let Some(v) = &self.email {
            record.email = v.clone();
        }
        if let Some(v) = &self.phone {
            record.phone = v.clone();
        }
        if let Some(v) = &self.department {
            record.department = v.clone();
        }
        if let Some(v) = &self.position {
            record.position = v.clone();
        }
        if let Some(v) = self.salary {
            record.salary = v;
        }
        if let Some(v) = &self.hire_date {
            record.hire_date = v.clone();
        }
        if let Some(v) = &self.address {
            record.address = v.clone();
        }
        if let Some(v) = self.dob {
            record.dob = Some(v);
        }
        if let Some(v) = self.ssn {
            record.ssn = Some(v);
        }
    }
}

/// Multi-criteria search input. Each present field adds one condition;
/// all conditions are ANDed. An all-`None` value matches every record.
///
/// Text fields are case-insensitive substring matches; salary bounds are
/// inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SearchCriteria {
    pub department: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SearchCriteria {
    /// Parse a sparse JSON object such as `{"department": "eng", "salary_min": 4000}`.
    /// Absent keys impose no constraint; unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.department.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }

    pub fn department(mut self, value: impl Into<String>) -> Self {
        self.department = Some(value.into());
        self
    }

    pub fn salary_min(mut self, value: f64) -> Self {
        self.salary_min = Some(value);
        self
    }

    pub fn salary_max(mut self, value: f64) -> Self {
        self.salary_max = Some(value);
        self
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }
}
