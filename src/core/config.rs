//! Connection configuration
//!
//! Settings a driver needs to open a connection, loadable from JSON or built
//! in code.

use super::error::{DatabaseError, Result};
use serde::{Deserialize, Serialize};

/// Path that opens a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Database file path, or `:memory:`
    pub path: String,
    /// Enforce foreign key constraints
    pub foreign_keys: bool,
    /// How long to wait on a locked database before failing
    pub busy_timeout_ms: Option<u64>,
    /// Open without write access
    pub read_only: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            path: IN_MEMORY_PATH.to_string(),
            foreign_keys: true,
            busy_timeout_ms: None,
            read_only: false,
        }
    }
}

impl ConnectionConfig {
    /// Create a configuration for the database at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Configuration for a private in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set foreign key enforcement
    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    /// Set the busy timeout
    pub fn with_busy_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.busy_timeout_ms = Some(timeout_ms);
        self
    }

    /// Open read-only
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Check if this configuration names an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }

    /// Reject settings no driver can honor
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(DatabaseError::invalid_config("database path is empty"));
        }
        if self.read_only && self.is_in_memory() {
            return Err(DatabaseError::invalid_config(
                "an in-memory database cannot be opened read-only",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert!(config.is_in_memory());
        assert!(config.foreign_keys);
        assert_eq!(config.busy_timeout_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ConnectionConfig::new("app.db")
            .with_foreign_keys(false)
            .with_busy_timeout_ms(250)
            .with_read_only(true);
        assert_eq!(config.path, "app.db");
        assert!(!config.foreign_keys);
        assert_eq!(config.busy_timeout_ms, Some(250));
        assert!(config.read_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() -> Result<()> {
        let config = ConnectionConfig::from_json(r#"{"path": "data.db", "busy_timeout_ms": 100}"#)?;
        assert_eq!(config.path, "data.db");
        assert_eq!(config.busy_timeout_ms, Some(100));
        assert!(config.foreign_keys);
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            ConnectionConfig::from_json("{\"path\": 3}"),
            Err(DatabaseError::ConfigParse(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_json(r#"{"path": ""}"#),
            Err(DatabaseError::InvalidConfig(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_json(r#"{"read_only": true}"#),
            Err(DatabaseError::InvalidConfig(_))
        ));
    }
}
