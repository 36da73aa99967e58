/// Database Module
///
/// The database layer is split into four concerns:
/// - **Statement Building** (`statement.rs`): SQL text and bind values, no I/O
/// - **Predicates** (`predicate.rs`): structured, parameterized filters
/// - **Query Execution** (`query.rs`): running statements and decoding rows
/// - **Connection** (`connection.rs`): the `Database` handle callers use
///
/// All operations return `CrudError`; driver errors are carried unchanged.
pub mod connection;
pub mod predicate;
pub mod query;
pub mod statement;

pub use connection::Database;
pub use predicate::{Operator, Predicate};
pub use query::{QueryExecutor, Row};
pub use statement::Statement;
