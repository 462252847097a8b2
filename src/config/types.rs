//! Configuration types for the reconciliation policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default smallest reported duration difference, in minutes.
pub const DEFAULT_DURATION_TOLERANCE_MINUTES: u32 = 15;

/// Default display name for groups that arrive without an employee name.
pub const DEFAULT_UNKNOWN_EMPLOYEE_LABEL: &str = "UNKNOWN EMPLOYEE";

/// Tunable policy for one reconciliation run.
///
/// Every field has a default matching the shipped `config/policy.yaml`, so a
/// partial file (or no file at all, via [`Default`]) yields a usable policy.
///
/// # Example
///
/// ```
/// use shift_reconciler::config::ReconcilePolicy;
///
/// let policy = ReconcilePolicy::default();
/// assert_eq!(policy.duration_tolerance_minutes, 15);
/// assert_eq!(policy.unknown_employee_label, "UNKNOWN EMPLOYEE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReconcilePolicy {
    /// Smallest scheduled/worked duration difference, in minutes, that is
    /// reported as a discrepancy. Zero reports every non-equal pair.
    #[serde(default = "default_duration_tolerance")]
    pub duration_tolerance_minutes: u32,
    /// Display name substituted when a group has an empty employee name.
    #[serde(default = "default_unknown_employee_label")]
    pub unknown_employee_label: String,
}

fn default_duration_tolerance() -> u32 {
    DEFAULT_DURATION_TOLERANCE_MINUTES
}

fn default_unknown_employee_label() -> String {
    DEFAULT_UNKNOWN_EMPLOYEE_LABEL.to_string()
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            duration_tolerance_minutes: default_duration_tolerance(),
            unknown_employee_label: default_unknown_employee_label(),
        }
    }
}

impl ReconcilePolicy {
    /// Validates the policy fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if the unknown-employee label
    /// is empty, since an empty label would silently drop employee names
    /// from rendered reports.
    pub fn validate(&self) -> EngineResult<()> {
        if self.unknown_employee_label.is_empty() {
            return Err(EngineError::InvalidPolicy {
                field: "unknown_employee_label".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
