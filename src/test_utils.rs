/// # Test Utilities Module
///
/// Fixtures and assertion helpers shared by the unit tests:
/// - Isolated in-memory database fixtures
/// - A sample `users` table with known rows
/// - CrudError assertion macro

use crate::core::{Result, Value};
use crate::core::db::Database;

/// Isolated database test fixture
pub struct DatabaseFixture {
    pub name: String,
    pub db: Database,
}

impl DatabaseFixture {
    /// Create a new, empty in-memory database
    pub fn new(name: &str) -> Result<Self> {
        Ok(DatabaseFixture {
            name: name.to_string(),
            db: Database::open_in_memory()?,
        })
    }

    /// Create fixture with the sample `users` table populated
    pub fn with_sample_data(name: &str) -> Result<Self> {
        let fixture = Self::new(name)?;
        fixture.setup_standard_schema()?;
        fixture.populate_sample_data()?;
        Ok(fixture)
    }

    pub fn setup_standard_schema(&self) -> Result<()> {
        self.db.create_table(
            "users",
            &[
                "id INTEGER PRIMARY KEY",
                "name TEXT NOT NULL",
                "email TEXT UNIQUE",
                "score REAL",
                "active INTEGER DEFAULT 1",
            ],
        )
    }

    /// Inserts ids 1..=4 with known names and scores
    pub fn populate_sample_data(&self) -> Result<()> {
        let users = vec![
            (1, "alice", Some("alice@example.com"), 9.5),
            (2, "bob", Some("bob@example.com"), 7.0),
            (3, "charlie", None, 8.25),
            (4, "dana", Some("dana@example.com"), 6.5),
        ];

        for (id, name, email, score) in users {
            self.db.insert(
                "users",
                &["id", "name", "email", "score"],
                &[Value::from(id), Value::from(name), Value::from(email), Value::from(score)],
            )?;
        }
        Ok(())
    }

    /// Ids of all users rows, ascending
    pub fn user_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .db
            .select("users", &["id"])
            .expect("Failed to select ids")
            .iter()
            .filter_map(|row| row["id"].as_i64())
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[macro_export]
macro_rules! assert_crud_error {
    ($result:expr, $expected_type:ident, $context:expr) => {
        match $result {
            Err($crate::CrudError::$expected_type(_)) => {}
            Ok(_) => panic!("Expected {} error but got Ok in {}", stringify!($expected_type), $context),
            Err(other) => panic!("Expected {} but got {:?} in {}", stringify!($expected_type), other, $context),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CrudError;

    #[test]
    fn test_database_fixture_creation() {
        let fixture = DatabaseFixture::new("test_create").unwrap();
        assert_eq!(fixture.name, "test_create");
        assert!(fixture.db.select("sqlite_master", &["name"]).unwrap().is_empty());
    }

    #[test]
    fn test_sample_data_fixture() {
        let fixture = DatabaseFixture::with_sample_data("test_sample").unwrap();
        assert_eq!(fixture.user_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_error_assertion_macro() {
        let result: Result<i32> = Err(CrudError::Validation("Test error".to_string()));
        assert_crud_error!(result, Validation, "macro test");
    }
}
