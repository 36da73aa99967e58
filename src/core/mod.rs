/// Core Module for crudsql
///
/// Shared infrastructure: the error type, the dynamic value type and the
/// database layer built on them.

pub mod db;
pub mod error;
pub mod value;

// Re-export commonly used types for convenience
pub use error::{CrudError, Result};
pub use value::Value;
