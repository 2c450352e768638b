//! PredicateBuilder: parameterized WHERE clauses from optional conditions.
//!
//! Values never reach the query text. Each present predicate renders one
//! condition with exactly one `?` placeholder and contributes exactly one
//! parameter, so `Filter::placeholder_count() == Filter::params().len()`
//! for every combination. Absent predicates are dropped; with nothing left
//! the clause is `1=1`.

use std::fmt;

use rusqlite::types::{Null, ToSql, ToSqlOutput};

use crate::columns::EmployeeColumn;
use crate::connection::UNICODE_LOWER_FN;

/// A statement parameter tagged with its SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Real(f64),
    Null,
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => s.to_sql(),
            Self::Integer(i) => Ok(ToSqlOutput::from(*i)),
            Self::Real(f) => Ok(ToSqlOutput::from(*f)),
            Self::Null => Ok(ToSqlOutput::from(Null)),
        }
    }
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Comparison applied between a column and its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    /// Case-insensitive equality.
    EqIgnoreCase,
    /// Case-insensitive substring match. `%`, `_` and `\` in the value match literally.
    ContainsIgnoreCase,
    Lt,
    Le,
    Ge,
    Gt,
}

/// One optional condition. `value: None` (or a NULL value) means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: EmployeeColumn,
    pub op: Comparison,
    pub value: Option<SqlParam>,
}

impl Predicate {
    pub fn new(column: EmployeeColumn, op: Comparison, value: Option<SqlParam>) -> Self {
        Self { column, op, value }
    }

    /// The value to bind, if any. `Some(SqlParam::Null)` counts as absent:
    /// no comparison operator matches NULL usefully.
    pub fn bound_value(&self) -> Option<&SqlParam> {
        self.value.as_ref().filter(|v| !matches!(v, SqlParam::Null))
    }

    fn render(&self, value: &SqlParam) -> (String, SqlParam) {
        let col = self.column.as_str();
        match self.op {
            Comparison::Eq => (format!("{col} = ?"), value.clone()),
            Comparison::EqIgnoreCase => (
                format!("{UNICODE_LOWER_FN}({col}) = {UNICODE_LOWER_FN}(?)"),
                value.clone(),
            ),
            Comparison::ContainsIgnoreCase => (
                format!("{UNICODE_LOWER_FN}({col}) LIKE {UNICODE_LOWER_FN}(?) ESCAPE '\\'"),
                SqlParam::Text(format!("%{}%", escape_like(&value.to_string()))),
            ),
            Comparison::Lt => (format!("{col} < ?"), value.clone()),
            Comparison::Le => (format!("{col} <= ?"), value.clone()),
            Comparison::Ge => (format!("{col} >= ?"), value.clone()),
            Comparison::Gt => (format!("{col} > ?"), value.clone()),
        }
    }
}

/// Escape LIKE wildcards so the caller's text matches literally.
pub fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// A rendered WHERE clause plus its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    clause: String,
    params: Vec<SqlParam>,
}

impl Filter {
    /// The always-true filter.
    pub fn all() -> Self {
        Self {
            clause: "1=1".to_string(),
            params: Vec::new(),
        }
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn placeholder_count(&self) -> usize {
        self.clause.matches('?').count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.params.is_empty()
    }
}

/// Render the present predicates, ANDed, in input order.
pub fn build_filter(predicates: &[Predicate]) -> Filter {
    let mut conditions = Vec::with_capacity(predicates.len());
    let mut params = Vec::with_capacity(predicates.len());

    for pred in predicates {
        if let Some(value) = pred.bound_value() {
            let (condition, param) = pred.render(value);
            conditions.push(condition);
            params.push(param);
        }
    }

    if conditions.is_empty() {
        return Filter::all();
    }

    Filter {
        clause: conditions.join(" AND "),
        params,
    }
}

/// Accumulates predicates, then renders them with [`build_filter`].
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    predicates: Vec<Predicate>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition that is always present.
    pub fn with(self, column: EmployeeColumn, op: Comparison, value: impl Into<SqlParam>) -> Self {
        self.push(Predicate::new(column, op, Some(value.into())))
    }

    /// Add a condition that only applies when `value` is `Some`.
    pub fn with_opt<V: Into<SqlParam>>(
        self,
        column: EmployeeColumn,
        op: Comparison,
        value: Option<V>,
    ) -> Self {
        self.push(Predicate::new(column, op, value.map(Into::into)))
    }

    pub fn push(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn build(&self) -> Filter {
        build_filter(&self.predicates)
    }
}
