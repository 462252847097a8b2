//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! reconciliation policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ReconcilePolicy;

/// Loads and provides access to the reconciliation policy.
///
/// The `ConfigLoader` reads a `policy.yaml` file from a directory and
/// validates it.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Reconciliation policy
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_reconciler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// assert_eq!(loader.policy().duration_tolerance_minutes, 15);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: ReconcilePolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// policy file is missing, contains invalid YAML, or fails validation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_reconciler::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), shift_reconciler::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<ReconcilePolicy>(&policy_path)?;
        policy.validate()?;

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> ReconcilePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_shipped_config() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().duration_tolerance_minutes, 15);
        assert_eq!(loader.policy().unknown_employee_label, "UNKNOWN EMPLOYEE");
    }

    #[test]
    fn test_shipped_config_matches_default_policy() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &ReconcilePolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_into_policy() {
        let policy = ConfigLoader::load(config_path()).unwrap().into_policy();
        assert_eq!(policy.duration_tolerance_minutes, 15);
    }
}
