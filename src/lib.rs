//! crudsql: a small CRUD helper over one file-backed SQLite database.
//!
//! ```
//! use crudsql::{Database, Value};
//!
//! let db = Database::open(":memory:")?;
//! db.create_table("users", &["id INTEGER", "name TEXT"])?;
//! db.insert("users", &["id", "name"], &[Value::from(1), Value::from("Ann")])?;
//!
//! let rows = db.select("users", &["id", "name"])?;
//! assert_eq!(rows[0]["name"], Value::from("Ann"));
//! # Ok::<(), crudsql::CrudError>(())
//! ```

pub mod config;
pub mod core;

#[cfg(test)]
mod test_utils;


pub use crate::config::{load_config, DatabaseConfig};
pub use crate::core::db::{Database, Operator, Predicate, Row};
pub use crate::core::{CrudError, Result, Value};
