/// Query Execution Module
///
/// Runs generated statements against a connection and decodes result rows
/// into column-name keyed maps.

use crate::core::db::statement::Statement;
use crate::core::{Result, Value};
use rusqlite::{params_from_iter, Connection};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error};

/// A decoded result row, keyed by the column names the engine reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a cell. A repeated column name replaces the earlier value.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(column.into(), value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn into_map(self) -> HashMap<String, Value> {
        self.values
    }

    /// Converts the row into a JSON object.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl std::ops::Index<&str> for Row {
    type Output = Value;

    fn index(&self, column: &str) -> &Value {
        &self.values[column]
    }
}

/// Statement execution service that operates on a database connection
pub struct QueryExecutor<'a> {
    connection: &'a Connection,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new QueryExecutor for the given connection
    pub fn new(connection: &'a Connection) -> Self {
        QueryExecutor { connection }
    }

    /// Executes a statement that returns no rows.
    ///
    /// # Returns
    ///
    /// The number of rows changed, as reported by the engine.
    ///
    /// # Errors
    ///
    /// Returns `CrudError::Sql` carrying the driver error unchanged.
    pub fn execute(&self, stmt: &Statement) -> Result<usize> {
        debug!(sql = %stmt.sql, binds = stmt.params.len(), "executing statement");
        self.connection
            .execute(&stmt.sql, params_from_iter(stmt.params.iter()))
            .map_err(|e| {
                error!(sql = %stmt.sql, "statement failed: {}", e);
                e.into()
            })
    }

    /// Runs a query and decodes every returned row.
    ///
    /// # Errors
    ///
    /// Returns `CrudError::Sql` if the statement cannot be prepared, bound
    /// or stepped.
    pub fn fetch(&self, stmt: &Statement) -> Result<Vec<Row>> {
        debug!(sql = %stmt.sql, binds = stmt.params.len(), "running query");
        self.fetch_inner(stmt).map_err(|e| {
            error!(sql = %stmt.sql, "query failed: {}", e);
            e.into()
        })
    }

    fn fetch_inner(&self, stmt: &Statement) -> rusqlite::Result<Vec<Row>> {
        let mut prepared = self.connection.prepare(&stmt.sql)?;
        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = prepared
            .query_map(params_from_iter(stmt.params.iter()), |row| {
                let mut decoded = Row::new();
                for (i, column) in columns.iter().enumerate() {
                    decoded.insert(column.as_str(), Value::from_column(row.get_ref(i)?));
                }
                Ok(decoded)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(rows = rows.len(), "query complete");
        Ok(rows)
    }
}
