//! CLI runtime configuration.
//!
//! # Responsibility
//! - Resolve logging level and directory from the process environment.
//!
//! # Invariants
//! - Missing variables fall back to defaults; values are validated later by
//!   `classroom_core::init_logging`.

use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "CLASSROOM_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CLASSROOM_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "classroom-logs";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = read(LOG_LEVEL_ENV)
            .unwrap_or_else(|| classroom_core::default_log_level().to_string());
        let log_dir = read(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        Self { log_level, log_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_variables_are_missing() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, classroom_core::default_log_level());
        assert_eq!(
            config.log_dir,
            std::env::temp_dir().join("classroom-logs")
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let vars = HashMap::from([
            (LOG_LEVEL_ENV, "warn".to_string()),
            (LOG_DIR_ENV, "/var/log/classroom".to_string()),
        ]);
        let config = CliConfig::from_lookup(|key| vars.get(key).cloned());

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/classroom"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = CliConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.log_level, classroom_core::default_log_level());
    }
}
