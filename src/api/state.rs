//! Application state for the Shift Reconciliation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReconcilePolicy;
use crate::reconcile::Reconciler;

/// Shared application state.
///
/// Contains the reconciler configured with the loaded policy. The policy is
/// immutable for the lifetime of the process, so handlers share it behind an
/// `Arc` and every request runs with its own locally-scoped accumulators.
#[derive(Clone)]
pub struct AppState {
    reconciler: Arc<Reconciler>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: ReconcilePolicy) -> Self {
        Self {
            reconciler: Arc::new(Reconciler::new(policy)),
        }
    }

    /// Returns a reference to the shared reconciler.
    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }
}
