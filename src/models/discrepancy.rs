//! Discrepancy report model.
//!
//! This module defines the DiscrepancyKind enum and the DiscrepancyReport
//! value emitted by the comparator for every finding.

use serde::{Deserialize, Serialize};

/// The kind of mismatch a discrepancy report describes.
///
/// # Example
///
/// ```
/// use shift_reconciler::models::DiscrepancyKind;
///
/// assert_eq!(DiscrepancyKind::TaskMismatch.to_string(), "TASK MISMATCH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// A scheduled shift has no worked counterpart at its slot index.
    MissingWorked,
    /// The worked task label differs from the scheduled one.
    TaskMismatch,
    /// A worked individual does not appear in the scheduled roster.
    UnauthorizedPerson,
    /// Scheduled and worked durations differ by at least the tolerance.
    DurationDifference,
}

impl DiscrepancyKind {
    /// Returns the title rendered in the report header for this kind.
    pub fn title(&self) -> &'static str {
        match self {
            DiscrepancyKind::MissingWorked => "SHIFT WORKED IS MISSING",
            DiscrepancyKind::TaskMismatch => "TASK MISMATCH",
            DiscrepancyKind::UnauthorizedPerson => "UNAUTHORIZED",
            DiscrepancyKind::DurationDifference => "DURATION DIFFERENCE",
        }
    }
}

impl std::fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// One formatted finding describing a mismatch for a single shift slot.
///
/// Reports are immutable values. The `detail` field holds the indented body
/// lines below the header; it is empty for kinds that render as a header
/// line alone (currently [`DiscrepancyKind::MissingWorked`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    /// Display name of the employee the slot belongs to.
    pub employee_name: String,
    /// The kind of mismatch found.
    pub kind: DiscrepancyKind,
    /// Indented body lines below the header; empty for header-only kinds.
    pub detail: String,
}

impl DiscrepancyReport {
    /// Creates a report with an empty detail body.
    pub fn new(employee_name: impl Into<String>, kind: DiscrepancyKind) -> Self {
        Self {
            employee_name: employee_name.into(),
            kind,
            detail: String::new(),
        }
    }

    /// Creates a report with the given detail body.
    pub fn with_detail(
        employee_name: impl Into<String>,
        kind: DiscrepancyKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            kind,
            detail: detail.into(),
        }
    }

    /// Renders the report as a text block.
    ///
    /// The first line is `"<employee>: <TITLE>"`; a non-empty detail follows
    /// on its own indented lines.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_reconciler::models::{DiscrepancyKind, DiscrepancyReport};
    ///
    /// let report = DiscrepancyReport::new("Jordan Lee", DiscrepancyKind::MissingWorked);
    /// assert_eq!(report.render(), "Jordan Lee: SHIFT WORKED IS MISSING");
    /// ```
    pub fn render(&self) -> String {
        if self.detail.is_empty() {
            format!("{}: {}", self.employee_name, self.kind)
        } else {
            format!("{}: {}\n{}", self.employee_name, self.kind, self.detail)
        }
    }
}
