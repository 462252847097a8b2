//! Response types for the Shift Reconciliation Engine API.
//!
//! This module defines the JSON response structures for the `/reconcile`
//! endpoint and the error body returned for rejected requests.

use serde::{Deserialize, Serialize};

use crate::models::{DiscrepancyKind, GroupOutcome, ReconciliationOutcome};

/// Response body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// All discrepancy reports, ordered by group, then slot, then rule.
    pub reports: Vec<ReportBody>,
    /// Presentation signals per input group, in input order.
    pub groups: Vec<GroupSignals>,
    /// Total number of reports; zero means no issues were found.
    pub issue_count: usize,
}

/// One discrepancy report in a reconcile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBody {
    /// Display name of the employee the slot belongs to.
    pub employee_name: String,
    /// The kind of mismatch found.
    pub kind: DiscrepancyKind,
    /// Indented body lines below the header; empty for header-only kinds.
    pub detail: String,
    /// The report rendered as the display text block.
    pub rendered: String,
}

/// Presentation signals for one employee group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSignals {
    /// Display name of the employee.
    pub employee_name: String,
    /// True if any slot in the group is missing its worked counterpart.
    pub any_missing_worked: bool,
    /// Per scheduled slot, true if that slot produced any report.
    pub slot_has_discrepancy: Vec<bool>,
}

impl From<ReconciliationOutcome> for ReconcileResponse {
    fn from(outcome: ReconciliationOutcome) -> Self {
        let reports: Vec<ReportBody> = outcome
            .reports
            .into_iter()
            .map(|report| ReportBody {
                rendered: report.render(),
                employee_name: report.employee_name,
                kind: report.kind,
                detail: report.detail,
            })
            .collect();
        let issue_count = reports.len();

        Self {
            reports,
            groups: outcome.groups.into_iter().map(Into::into).collect(),
            issue_count,
        }
    }
}

impl From<GroupOutcome> for GroupSignals {
    fn from(outcome: GroupOutcome) -> Self {
        GroupSignals {
            employee_name: outcome.employee_name,
            any_missing_worked: outcome.any_missing_worked,
            slot_has_discrepancy: outcome.slot_has_discrepancy,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
