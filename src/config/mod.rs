//! Configuration for the Shift Reconciliation Engine.
//!
//! This module provides the reconciliation policy types and the YAML
//! configuration loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_DURATION_TOLERANCE_MINUTES, DEFAULT_UNKNOWN_EMPLOYEE_LABEL, ReconcilePolicy,
};
