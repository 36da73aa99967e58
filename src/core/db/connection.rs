/// Connection Management Module
///
/// `Database` owns one SQLite connection and exposes the CRUD operations.
/// Every call is synchronous and independent: no transactions, no caching,
/// no session state beyond the open connection.

use crate::config::DatabaseConfig;
use crate::core::db::predicate::Predicate;
use crate::core::db::query::{QueryExecutor, Row};
use crate::core::db::statement;
use crate::core::{CrudError, Result, Value};
use rusqlite::Connection;
use std::time::Duration;
use tracing::debug;

/// Handle to a single open SQLite database.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: String,
}

impl Database {
    /// Opens or creates the database at `path`.
    ///
    /// Engine special values such as `":memory:"` are passed through.
    ///
    /// # Errors
    ///
    /// `CrudError::Connection` if the engine cannot open the file.
    ///
    /// # Examples
    ///
    /// ```
    /// let db = crudsql::Database::open(":memory:")?;
    /// db.close()?;
    /// # Ok::<(), crudsql::CrudError>(())
    /// ```
    pub fn open(path: &str) -> Result<Self> {
        debug!(path, "opening database");
        let conn = Connection::open(path).map_err(CrudError::Connection)?;
        Ok(Database {
            conn,
            path: path.to_string(),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Opens `config.path` and applies the configured busy timeout and pragmas.
    pub fn open_with_config(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::open(&config.path)?;

        if let Some(ms) = config.busy_timeout_ms {
            db.conn
                .busy_timeout(Duration::from_millis(ms))
                .map_err(CrudError::Connection)?;
        }
        if let Some(enabled) = config.pragmas.foreign_keys {
            db.conn
                .pragma_update(None, "foreign_keys", enabled)
                .map_err(CrudError::Connection)?;
        }
        if let Some(mode) = &config.pragmas.journal_mode {
            let applied: String = db
                .conn
                .pragma_update_and_check(None, "journal_mode", mode, |row| row.get(0))
                .map_err(CrudError::Connection)?;
            debug!(requested = %mode, applied = %applied, "journal mode set");
        }

        Ok(db)
    }

    /// Closes the connection, consuming the handle.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.path, "closing database");
        self.conn
            .close()
            .map_err(|(_, e)| CrudError::Connection(e))
    }

    /// The path the database was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Row id of the most recent successful insert on this connection.
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    fn executor(&self) -> QueryExecutor<'_> {
        QueryExecutor::new(&self.conn)
    }

    /// Creates `table` unless it already exists.
    ///
    /// Column definitions are raw SQL (name, type, constraints) and are not
    /// validated.
    pub fn create_table<S: AsRef<str>>(&self, table: &str, column_defs: &[S]) -> Result<()> {
        self.executor()
            .execute(&statement::create_table(table, column_defs))?;
        Ok(())
    }

    /// Inserts one row, binding `values` positionally against `columns`.
    ///
    /// A length mismatch between the two is reported by the engine as
    /// `CrudError::Sql`.
    pub fn insert<S: AsRef<str>>(&self, table: &str, columns: &[S], values: &[Value]) -> Result<()> {
        self.executor()
            .execute(&statement::insert(table, columns, values))?;
        Ok(())
    }

    /// Returns every row of `table`, projected to `columns`.
    pub fn select<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> Result<Vec<Row>> {
        self.executor().fetch(&statement::select(table, columns))
    }

    /// Like [`Database::select`] with `raw_where` appended verbatim as the
    /// `WHERE` clause.
    ///
    /// The clause is NOT parameterized. Only pass trusted SQL; prefer
    /// [`Database::select_filtered`] when values come from outside.
    pub fn select_where<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        raw_where: &str,
    ) -> Result<Vec<Row>> {
        self.executor()
            .fetch(&statement::select_where(table, columns, raw_where))
    }

    /// Selects rows matching every predicate. Operands are bound as parameters.
    pub fn select_filtered<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        predicates: &[Predicate],
    ) -> Result<Vec<Row>> {
        self.executor()
            .fetch(&statement::select_filtered(table, columns, predicates))
    }

    /// Sets the `set` columns on rows matching all `filter` equalities.
    ///
    /// Returns the number of rows changed. An empty `set` or `filter` is
    /// refused with `CrudError::Validation`.
    pub fn update(
        &self,
        table: &str,
        set: &[(&str, Value)],
        filter: &[(&str, Value)],
    ) -> Result<usize> {
        let stmt = statement::update(table, set, filter)?;
        self.executor().execute(&stmt)
    }

    /// Deletes rows matching all `filter` equalities and returns how many
    /// went. An empty `filter` is refused with `CrudError::Validation`.
    pub fn delete(&self, table: &str, filter: &[(&str, Value)]) -> Result<usize> {
        let stmt = statement::delete(table, filter)?;
        self.executor().execute(&stmt)
    }
}
