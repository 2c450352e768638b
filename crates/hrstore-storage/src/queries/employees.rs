//! employees table queries.

use hrstore_core::errors::{StoreError, StoreResult};
use hrstore_core::types::employee::{EmployeeId, EmployeeRecord, SearchCriteria};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::columns::{EmployeeColumn, SELECT_COLUMNS};
use crate::mapper::{map_employee_row, record_assignments};
use crate::predicate::{Comparison, Filter, PredicateBuilder, SqlParam};

/// Run `SELECT ... FROM employees WHERE <filter> ORDER BY empid`.
pub fn select_employees(conn: &Connection, filter: &Filter) -> StoreResult<Vec<EmployeeRecord>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM employees WHERE {} ORDER BY empid",
        filter.clause()
    );
    tracing::debug!(clause = filter.clause(), params = filter.params().len(), "select employees");

    let mut stmt = conn.prepare_cached(&sql).map_err(StoreError::query)?;
    let rows = stmt
        .query_map(params_from_iter(filter.params()), map_employee_row)
        .map_err(StoreError::query)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(StoreError::query)?);
    }
    Ok(result)
}

/// Get a single employee by id.
pub fn get_employee(conn: &Connection, id: EmployeeId) -> StoreResult<Option<EmployeeRecord>> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM employees WHERE empid = ?1");
    conn.prepare_cached(&sql)
        .map_err(StoreError::query)?
        .query_row(params![id], map_employee_row)
        .optional()
        .map_err(StoreError::query)
}

pub fn employee_exists(conn: &Connection, id: EmployeeId) -> StoreResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM employees WHERE empid = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(StoreError::query)?;
    Ok(count > 0)
}

/// Count all employees.
pub fn count_employees(conn: &Connection) -> StoreResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        .map_err(StoreError::query)
}

/// `UPDATE employees SET a = ?, b = ? ... WHERE empid = ?`. Returns rows affected.
///
/// An empty assignment list is a caller bug; it is rejected as a query
/// error rather than rendering `SET` with nothing after it.
pub fn update_employee(
    conn: &Connection,
    id: EmployeeId,
    assignments: &[(EmployeeColumn, SqlParam)],
) -> StoreResult<usize> {
    if assignments.is_empty() {
        return Err(StoreError::Query {
            message: "update without assignments".to_string(),
        });
    }

    let set_clause = assignments
        .iter()
        .map(|(col, _)| format!("{} = ?", col.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE employees SET {set_clause} WHERE empid = ?");

    let id_param = SqlParam::Integer(id);
    let mut values: Vec<&SqlParam> = assignments.iter().map(|(_, v)| v).collect();
    values.push(&id_param);

    conn.execute(&sql, params_from_iter(values))
        .map_err(StoreError::query)
}

/// Insert a full record. Used to provision data; the record store itself
/// exposes no create operation.
pub fn insert_employee(conn: &Connection, record: &EmployeeRecord) -> StoreResult<()> {
    let assignments = record_assignments(record);
    let placeholders = vec!["?"; assignments.len()].join(", ");
    let sql = format!("INSERT INTO employees ({SELECT_COLUMNS}) VALUES ({placeholders})");
    conn.execute(&sql, params_from_iter(assignments.iter().map(|(_, v)| v)))
        .map_err(StoreError::query)?;
    Ok(())
}

// ─── Filters ────────────────────────────────────────────────────────

pub fn id_filter(id: EmployeeId) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Id, Comparison::Eq, id)
        .build()
}

/// Substring match on whichever names are supplied. Empty strings count as absent.
pub fn name_filter(first_name: Option<&str>, last_name: Option<&str>) -> Filter {
    PredicateBuilder::new()
        .with_opt(
            EmployeeColumn::FirstName,
            Comparison::ContainsIgnoreCase,
            first_name.filter(|s| !s.is_empty()),
        )
        .with_opt(
            EmployeeColumn::LastName,
            Comparison::ContainsIgnoreCase,
            last_name.filter(|s| !s.is_empty()),
        )
        .build()
}

pub fn department_filter(department: &str) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Department, Comparison::ContainsIgnoreCase, department)
        .build()
}

pub fn email_filter(email: &str) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Email, Comparison::EqIgnoreCase, email)
        .build()
}

pub fn dob_filter(dob: i64) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Dob, Comparison::Eq, dob)
        .build()
}

pub fn ssn_filter(ssn: i64) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Ssn, Comparison::Eq, ssn)
        .build()
}

/// One condition per supplied criterion, in a fixed order.
pub fn criteria_filter(criteria: &SearchCriteria) -> Filter {
    PredicateBuilder::new()
        .with_opt(
            EmployeeColumn::Department,
            Comparison::ContainsIgnoreCase,
            criteria.department.as_deref(),
        )
        .with_opt(EmployeeColumn::Salary, Comparison::Ge, criteria.salary_min)
        .with_opt(EmployeeColumn::Salary, Comparison::Le, criteria.salary_max)
        .with_opt(
            EmployeeColumn::FirstName,
            Comparison::ContainsIgnoreCase,
            criteria.first_name.as_deref(),
        )
        .with_opt(
            EmployeeColumn::LastName,
            Comparison::ContainsIgnoreCase,
            criteria.last_name.as_deref(),
        )
        .build()
}

pub fn below_threshold_filter(threshold: f64) -> Filter {
    PredicateBuilder::new()
        .with(EmployeeColumn::Salary, Comparison::Lt, threshold)
        .build()
}
