//! Reconciliation input and outcome models.
//!
//! This module defines the EmployeeSlotGroup input unit consumed by the
//! runner, and the outcome types carrying the aggregate reports and the
//! presentation signals derived from them.

use serde::{Deserialize, Serialize};

use super::DiscrepancyReport;

/// One employee's scheduled and worked shift texts for the visible scope.
///
/// Slots are identified positionally: the scheduled text at index `i` pairs
/// with the worked text at index `i`, or with no worked record if the worked
/// list is shorter. Worked entries beyond the scheduled count are never
/// visited; iteration is driven by the scheduled list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSlotGroup {
    /// Display name of the employee.
    pub employee_name: String,
    /// Raw text blobs for the scheduled timeline, in slot order.
    pub scheduled_raw_texts: Vec<String>,
    /// Raw text blobs for the worked timeline, in slot order.
    pub worked_raw_texts: Vec<String>,
}

/// Presentation signals derived for one employee group.
///
/// The presentation layer uses these to decide what to visually mark without
/// the engine touching any presentation state itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOutcome {
    /// Display name of the employee (after empty-name substitution).
    pub employee_name: String,
    /// True if any slot in the group produced a missing-worked report.
    pub any_missing_worked: bool,
    /// Per scheduled slot, true if that slot produced any report.
    pub slot_has_discrepancy: Vec<bool>,
}

/// The aggregate result of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationOutcome {
    /// All discrepancy reports, ordered by group, then slot, then rule.
    pub reports: Vec<DiscrepancyReport>,
    /// One outcome per input group, in input order.
    pub groups: Vec<GroupOutcome>,
}

impl ReconciliationOutcome {
    /// Returns true if the run produced no reports at all.
    ///
    /// The caller is responsible for rendering a "no issues found" state
    /// when this is true.
    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }
}
