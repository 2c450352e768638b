//! RecordMapper: `employees` rows to `EmployeeRecord` and back to
//! column/value lists for writes.

use hrstore_core::types::employee::{EmployeePatch, EmployeeRecord};
use rusqlite::Row;

use crate::columns::EmployeeColumn;
use crate::predicate::SqlParam;

/// Map a row selected with `SELECT_COLUMNS`.
///
/// NULL text columns (rows written by older tools) read as empty strings.
pub fn map_employee_row(row: &Row<'_>) -> rusqlite::Result<EmployeeRecord> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };

    Ok(EmployeeRecord {
        id: row.get(0)?,
        first_name: text(1)?,
        last_name: text(2)?,
        email: text(3)?,
        phone: text(4)?,
        department: text(5)?,
        position: text(6)?,
        salary: row.get::<_, Option<f64>>(7)?.unwrap_or_default(),
        hire_date: text(8)?,
        address: text(9)?,
        dob: row.get(10)?,
        ssn: row.get(11)?,
    })
}

/// Column/value pairs for every supplied field of a patch, in column order.
/// Empty when nothing is supplied.
pub fn patch_assignments(patch: &EmployeePatch) -> Vec<(EmployeeColumn, SqlParam)> {
    let text = |v: &Option<String>| v.as_deref().map(SqlParam::from);
    let candidates = [
        (EmployeeColumn::FirstName, text(&patch.first_name)),
        (EmployeeColumn::LastName, text(&patch.last_name)),
        (EmployeeColumn::Email, text(&patch.email)),
        (EmployeeColumn::Phone, text(&patch.phone)),
        (EmployeeColumn::Department, text(&patch.department)),
        (EmployeeColumn::Position, text(&patch.position)),
        (EmployeeColumn::Salary, patch.salary.map(SqlParam::Real)),
        (EmployeeColumn::HireDate, text(&patch.hire_date)),
        (EmployeeColumn::Address, text(&patch.address)),
        (EmployeeColumn::Dob, patch.dob.map(SqlParam::Integer)),
        (EmployeeColumn::Ssn, patch.ssn.map(SqlParam::Integer)),
    ];

    candidates
        .into_iter()
        .filter_map(|(col, value)| value.map(|v| (col, v)))
        .collect()
}

/// Column/value pairs for every column of a full record, id included.
pub fn record_assignments(record: &EmployeeRecord) -> Vec<(EmployeeColumn, SqlParam)> {
    vec![
        (EmployeeColumn::Id, SqlParam::Integer(record.id)),
        (EmployeeColumn::FirstName, SqlParam::from(record.first_name.as_str())),
        (EmployeeColumn::LastName, SqlParam::from(record.last_name.as_str())),
        (EmployeeColumn::Email, SqlParam::from(record.email.as_str())),
        (EmployeeColumn::Phone, SqlParam::from(record.phone.as_str())),
        (EmployeeColumn::Department, SqlParam::from(record.department.as_str())),
        (EmployeeColumn::Position, SqlParam::from(record.position.as_str())),
        (EmployeeColumn::Salary, SqlParam::Real(record.salary)),
        (EmployeeColumn::HireDate, SqlParam::from(record.hire_date.as_str())),
        (EmployeeColumn::Address, SqlParam::from(record.address.as_str())),
        (EmployeeColumn::Dob, SqlParam::from(record.dob)),
        (EmployeeColumn::Ssn, SqlParam::from(record.ssn)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_assignments_only_supplied() {
        let patch = EmployeePatch {
            last_name: Some("Lovelace".to_string()),
            salary: Some(0.0),
            ssn: Some(123456789),
            ..Default::default()
        };
        let cols: Vec<EmployeeColumn> = patch_assignments(&patch).into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cols,
            vec![EmployeeColumn::LastName, EmployeeColumn::Salary, EmployeeColumn::Ssn]
        );
    }

    #[test]
    fn test_empty_patch_has_no_assignments() {
        assert!(patch_assignments(&EmployeePatch::default()).is_empty());
    }

    #[test]
    fn test_record_assignments_cover_every_column() {
        let cols: Vec<EmployeeColumn> = record_assignments(&EmployeeRecord::default())
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(cols, EmployeeColumn::ALL.to_vec());
    }
}
