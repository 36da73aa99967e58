/// Statement Builder Module
///
/// Pure functions that turn table names, column lists and values into SQL
/// text plus the positional values to bind. Nothing here touches a
/// connection.
///
/// Identifiers are interpolated as given. Only values are parameterized.
use crate::core::db::predicate::{render_predicates, Predicate};
use crate::core::{CrudError, Result, Value};

/// A generated SQL statement and the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    fn new(sql: String, params: Vec<Value>) -> Self {
        Statement { sql, params }
    }

    /// Number of `?` markers in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

/// Returns `count` comma-separated `?` markers.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn equality_clause(pairs: &[(&str, Value)], separator: &str) -> (String, Vec<Value>) {
    let clause = pairs
        .iter()
        .map(|(column, _)| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(separator);
    let params = pairs.iter().map(|(_, value)| value.clone()).collect();
    (clause, params)
}

/// `CREATE TABLE IF NOT EXISTS <table> (<defs>)`
pub fn create_table<S: AsRef<str>>(table: &str, column_defs: &[S]) -> Statement {
    let defs = column_defs
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    Statement::new(
        format!("CREATE TABLE IF NOT EXISTS {} ({})", table, defs),
        Vec::new(),
    )
}

/// `INSERT INTO <table> (<cols>) VALUES (?, ...)`, one marker per value.
///
/// Column and value counts are not compared here; the engine rejects a
/// mismatch when the statement is prepared.
pub fn insert<S: AsRef<str>>(table: &str, columns: &[S], values: &[Value]) -> Statement {
    let cols = columns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    Statement::new(
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols,
            placeholders(values.len())
        ),
        values.to_vec(),
    )
}

/// `SELECT <cols> FROM <table>`
pub fn select<S: AsRef<str>>(table: &str, columns: &[S]) -> Statement {
    let cols = columns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    Statement::new(format!("SELECT {} FROM {}", cols, table), Vec::new())
}

/// `SELECT <cols> FROM <table> WHERE <raw_where>`
///
/// The clause is concatenated verbatim and is not parameterized. Never pass
/// untrusted input here.
pub fn select_where<S: AsRef<str>>(table: &str, columns: &[S], raw_where: &str) -> Statement {
    let mut stmt = select(table, columns);
    stmt.sql.push_str(" WHERE ");
    stmt.sql.push_str(raw_where);
    stmt
}

/// `SELECT <cols> FROM <table> [WHERE <p1> AND <p2> ...]`
///
/// An empty predicate list produces no `WHERE` clause.
pub fn select_filtered<S: AsRef<str>>(
    table: &str,
    columns: &[S],
    predicates: &[Predicate],
) -> Statement {
    let mut stmt = select(table, columns);
    if !predicates.is_empty() {
        let (clause, params) = render_predicates(predicates);
        stmt.sql.push_str(" WHERE ");
        stmt.sql.push_str(&clause);
        stmt.params = params;
    }
    stmt
}

/// `UPDATE <table> SET a = ?, ... WHERE x = ? AND ...`
///
/// SET values are bound before WHERE values, each in slice order. Both lists
/// must be non-empty.
pub fn update(table: &str, set: &[(&str, Value)], filter: &[(&str, Value)]) -> Result<Statement> {
    if set.is_empty() {
        return Err(CrudError::Validation(format!(
            "UPDATE on '{}' requires at least one column to set",
            table
        )));
    }
    if filter.is_empty() {
        return Err(CrudError::Validation(format!(
            "UPDATE on '{}' requires a non-empty filter",
            table
        )));
    }

    let (set_clause, mut params) = equality_clause(set, ", ");
    let (where_clause, where_params) = equality_clause(filter, " AND ");
    params.extend(where_params);

    Ok(Statement::new(
        format!("UPDATE {} SET {} WHERE {}", table, set_clause, where_clause),
        params,
    ))
}

/// `DELETE FROM <table> WHERE x = ? AND ...`
///
/// An empty filter is refused rather than deleting every row.
pub fn delete(table: &str, filter: &[(&str, Value)]) -> Result<Statement> {
    if filter.is_empty() {
        return Err(CrudError::Validation(format!(
            "DELETE on '{}' requires a non-empty filter",
            table
        )));
    }

    let (where_clause, params) = equality_clause(filter, " AND ");
    Ok(Statement::new(
        format!("DELETE FROM {} WHERE {}", table, where_clause),
        params,
    ))
}
