//! Slot comparison logic.
//!
//! This module compares one scheduled shift record against its worked
//! counterpart and produces the ordered discrepancy reports for that slot.

use crate::config::ReconcilePolicy;
use crate::models::{DiscrepancyKind, DiscrepancyReport, ShiftRecord};

/// Compares one shift slot and returns its discrepancy reports.
///
/// The checks run in a fixed precedence order:
///
/// 1. Scheduled present, worked absent: exactly one
///    [`DiscrepancyKind::MissingWorked`] report; no other checks run.
/// 2. Scheduled absent: no reports. An unscheduled worked shift is not
///    itself flagged by this engine.
/// 3. Both present: three independent checks, none short-circuiting another,
///    appended in rule order:
///    task mismatch (exact, case-sensitive string inequality), one
///    unauthorized-person report per worked individual whose normalized form
///    is not in the scheduled roster, then a duration difference when both
///    durations are present and differ by at least the policy tolerance.
///
/// The comparator is a pure function from records to reports; flagging the
/// underlying visual element is the presentation layer's responsibility.
///
/// # Example
///
/// ```
/// use shift_reconciler::config::ReconcilePolicy;
/// use shift_reconciler::models::DiscrepancyKind;
/// use shift_reconciler::parsing::parse_record;
/// use shift_reconciler::reconcile::compare_slot;
///
/// let scheduled = parse_record("Task: Stocking<br>Lee, Amy<br>8:00 AM to 4:00 PM");
/// let worked = parse_record("Task: Cleaning<br>Lee, Amy<br>8:00 AM to 4:00 PM");
///
/// let reports = compare_slot(
///     Some(&scheduled),
///     Some(&worked),
///     "Jordan Lee",
///     &ReconcilePolicy::default(),
/// );
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].kind, DiscrepancyKind::TaskMismatch);
/// ```
pub fn compare_slot(
    scheduled: Option<&ShiftRecord>,
    worked: Option<&ShiftRecord>,
    employee_name: &str,
    policy: &ReconcilePolicy,
) -> Vec<DiscrepancyReport> {
    let mut reports = Vec::new();

    let Some(scheduled) = scheduled else {
        // Nothing scheduled means nothing to validate against.
        return reports;
    };

    let Some(worked) = worked else {
        reports.push(DiscrepancyReport::new(
            employee_name,
            DiscrepancyKind::MissingWorked,
        ));
        return reports;
    };

    // Task check
    if worked.task != scheduled.task {
        reports.push(DiscrepancyReport::with_detail(
            employee_name,
            DiscrepancyKind::TaskMismatch,
            format!(
                "  Scheduled: \"{}\"\n  Worked:    \"{}\"",
                scheduled.task, worked.task
            ),
        ));
    }

    // Authorization check: set membership of the normalized form, one report
    // per offending occurrence, in worked order.
    for (raw, normalized) in worked.raw_individuals.iter().zip(&worked.individuals) {
        if !scheduled.individuals.contains(normalized) {
            reports.push(DiscrepancyReport::with_detail(
                employee_name,
                DiscrepancyKind::UnauthorizedPerson,
                format!(
                    "  Found:     \"{}\"\n  Allowed:   {}",
                    raw,
                    allowed_names_display(scheduled)
                ),
            ));
        }
    }

    // Duration check, skipped unless both sides carry a duration.
    if let (Some(scheduled_minutes), Some(worked_minutes)) =
        (scheduled.duration_minutes, worked.duration_minutes)
    {
        let difference = worked_minutes.abs_diff(scheduled_minutes);
        // A zero tolerance still requires an actual difference.
        if difference >= policy.duration_tolerance_minutes.max(1) {
            reports.push(DiscrepancyReport::with_detail(
                employee_name,
                DiscrepancyKind::DurationDifference,
                format!(
                    "  Scheduled: {}\n  Worked:    {}",
                    format_duration(scheduled_minutes),
                    format_duration(worked_minutes)
                ),
            ));
        }
    }

    reports
}

/// Scheduled raw names shown in the unauthorized-person detail.
///
/// Digit-bearing entries are placeholder rows in the source display; they
/// are filtered from the message only, never from membership testing.
fn allowed_names_display(scheduled: &ShiftRecord) -> String {
    scheduled
        .raw_individuals
        .iter()
        .filter(|name| !name.chars().any(|c| c.is_ascii_digit()))
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a minute count as `"<h>hr<s> <m>min"`.
///
/// The plural suffix applies whenever the hour count is not exactly 1, so a
/// sub-hour duration renders as `"0hrs <m>min"`.
fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;
    let suffix = if hours == 1 { "" } else { "s" };
    format!("{hours}hr{suffix} {remainder}min")
}
