//! Configuration entities.

use serde::{Deserialize, Serialize};

use super::TaskPriority;
use crate::errors::{TasksError, TasksResult};

/// Environment variable overriding [`TasksConfig::default_priority`]
pub const DEFAULT_PRIORITY_ENV: &str = "TASKLIST_DEFAULT_PRIORITY";

/// Environment variable overriding [`TasksConfig::log_level`]
pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";

/// Manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority given to tasks created without an explicit one
    #[serde(default = "default_priority", rename = "defaultPriority")]
    pub default_priority: u8,

    /// Log level suggested to binaries embedding the manager
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,
}

const fn default_priority() -> u8 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
            log_level: default_log_level(),
        }
    }
}

impl TasksConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing keys fall back to defaults
    pub fn from_json_str(content: &str) -> TasksResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TASKLIST_*` environment variables
    pub fn from_env() -> TasksResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TasksResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEFAULT_PRIORITY_ENV) {
            config.default_priority = raw.trim().parse().map_err(|_| TasksError::ConfigError {
                reason: format!("{DEFAULT_PRIORITY_ENV} must be an integer, got '{raw}'"),
            })?;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level.trim().to_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the default priority is a valid level
    pub fn validate(&self) -> TasksResult<()> {
        self.priority().map(|_| ()).map_err(|e| TasksError::ConfigError {
            reason: format!("defaultPriority: {e}"),
        })
    }

    /// The default priority as a validated level
    pub fn priority(&self) -> TasksResult<TaskPriority> {
        TaskPriority::new(i64::from(self.default_priority))
    }
}
