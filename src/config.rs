use crate::core::{CrudError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection settings parsed from a TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// Database file path, or an engine special value such as ":memory:".
    pub path: String,
    /// Busy timeout handed to the engine, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
    #[serde(default)]
    pub pragmas: PragmaConfig,
}

/// Pragmas applied right after the connection is opened.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PragmaConfig {
    pub foreign_keys: Option<bool>,
    pub journal_mode: Option<String>,
}

impl DatabaseConfig {
    /// Config for `path` with every optional setting left to the engine default.
    pub fn new(path: impl Into<String>) -> Self {
        DatabaseConfig {
            path: path.into(),
            busy_timeout_ms: None,
            pragmas: PragmaConfig::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CrudError::Config(e.to_string()))
    }
}

/// Loads configuration from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// let config = crudsql::config::load_config("crudsql.toml")?;
/// println!("{:?}", config);
/// # Ok::<(), crudsql::CrudError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DatabaseConfig> {
    let content = fs::read_to_string(path)?;
    DatabaseConfig::from_toml_str(&content)
}
