//! Reconciliation run orchestration.
//!
//! This module drives the comparison across all shift slots for all employee
//! groups in one input snapshot, aggregating the discrepancy reports and the
//! presentation signals derived from them.

use tracing::info;

use crate::config::ReconcilePolicy;
use crate::models::{
    DiscrepancyKind, EmployeeSlotGroup, GroupOutcome, ReconciliationOutcome, ShiftRecord,
};
use crate::parsing::parse_record;

use super::comparator::compare_slot;

/// Runs reconciliation over employee slot groups.
///
/// A `Reconciler` holds only the immutable policy; every [`run`] builds its
/// own accumulators, so runs are independent and idempotent for the same
/// input, and concurrent runs never share state.
///
/// [`run`]: Reconciler::run
///
/// # Example
///
/// ```
/// use shift_reconciler::config::ReconcilePolicy;
/// use shift_reconciler::models::EmployeeSlotGroup;
/// use shift_reconciler::reconcile::Reconciler;
///
/// let reconciler = Reconciler::new(ReconcilePolicy::default());
/// let groups = vec![EmployeeSlotGroup {
///     employee_name: "Jordan Lee".to_string(),
///     scheduled_raw_texts: vec!["Task: Stocking<br>Lee, Amy<br>".to_string()],
///     worked_raw_texts: vec![],
/// }];
///
/// let outcome = reconciler.run(&groups);
/// assert_eq!(outcome.reports.len(), 1);
/// assert!(outcome.groups[0].any_missing_worked);
/// ```
#[derive(Debug, Clone)]
pub struct Reconciler {
    policy: ReconcilePolicy,
}

impl Reconciler {
    /// Creates a reconciler with the given policy.
    pub fn new(policy: ReconcilePolicy) -> Self {
        Self { policy }
    }

    /// Creates a reconciler with the default policy.
    pub fn with_defaults() -> Self {
        Self::new(ReconcilePolicy::default())
    }

    /// Returns the policy this reconciler runs with.
    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Reconciles all groups and returns the aggregate outcome.
    ///
    /// For each group in input order, every scheduled raw text is parsed and
    /// compared against the worked text at the same index (or against an
    /// absent record when the worked list is shorter). Worked entries beyond
    /// the scheduled count are never visited. Groups with zero scheduled
    /// entries contribute no reports.
    ///
    /// The aggregate preserves full ordering: group order, then within-group
    /// slot order, then within-slot rule order.
    pub fn run(&self, groups: &[EmployeeSlotGroup]) -> ReconciliationOutcome {
        let mut reports = Vec::new();
        let mut group_outcomes = Vec::with_capacity(groups.len());

        for group in groups {
            let employee_name = self.display_name(group);

            let scheduled: Vec<ShiftRecord> = group
                .scheduled_raw_texts
                .iter()
                .map(|text| parse_record(text))
                .collect();
            // Iteration is driven by the scheduled list; extra worked
            // entries are never parsed or compared.
            let worked: Vec<ShiftRecord> = group
                .worked_raw_texts
                .iter()
                .take(scheduled.len())
                .map(|text| parse_record(text))
                .collect();

            let mut any_missing_worked = false;
            let mut slot_has_discrepancy = Vec::with_capacity(scheduled.len());

            for (index, scheduled_record) in scheduled.iter().enumerate() {
                let slot_reports = compare_slot(
                    Some(scheduled_record),
                    worked.get(index),
                    &employee_name,
                    &self.policy,
                );

                if slot_reports
                    .iter()
                    .any(|report| report.kind == DiscrepancyKind::MissingWorked)
                {
                    any_missing_worked = true;
                }
                slot_has_discrepancy.push(!slot_reports.is_empty());
                reports.extend(slot_reports);
            }

            group_outcomes.push(GroupOutcome {
                employee_name,
                any_missing_worked,
                slot_has_discrepancy,
            });
        }

        info!(
            groups = groups.len(),
            reports = reports.len(),
            "Reconciliation run complete"
        );

        ReconciliationOutcome {
            reports,
            groups: group_outcomes,
        }
    }

    /// Employee name shown in reports, substituting the policy label when
    /// the group arrived with a blank name.
    fn display_name(&self, group: &EmployeeSlotGroup) -> String {
        let trimmed = group.employee_name.trim();
        if trimmed.is_empty() {
            self.policy.unknown_employee_label.clone()
        } else {
            trimmed.to_string()
        }
    }
}
