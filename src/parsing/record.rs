//! Shift record text parsing.
//!
//! This module extracts the structured fields of a [`ShiftRecord`] from one
//! shift's raw text blob. The blob is an unstructured string that may embed
//! markup fragments such as `<br>` as inert text; they serve only as token
//! delimiters and are never interpreted as a markup tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ShiftRecord;

use super::name::normalize_name;
use super::time::parse_duration;

/// Task label: everything after `Task:` up to the next `<` or end of text.
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Task:\s*([^<]+)").unwrap());

/// Name token: `<word>, <word>` immediately followed by a line-break marker
/// or the end of the text.
static INDIVIDUAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\w+,\s*\w+)(?:<br|$)").unwrap());

/// Parses one shift's raw text blob into a [`ShiftRecord`].
///
/// Extraction is best-effort and never fails:
///
/// - the task is the first `Task:` label's trimmed value, or `""` when the
///   label is absent;
/// - individuals are every `"<word>, <word>"` token delimited by a `<br`
///   marker or the end of the text, in order of appearance with duplicates
///   preserved, paired with their normalized forms;
/// - the duration comes from the first clock-time range anywhere in the
///   text, or stays absent when none parses.
///
/// # Example
///
/// ```
/// use shift_reconciler::parsing::parse_record;
///
/// let record = parse_record("Task: Stocking<br>Lee, Amy<br>8:00 AM to 4:00 PM");
/// assert_eq!(record.task, "Stocking");
/// assert_eq!(record.raw_individuals, vec!["Lee, Amy"]);
/// assert_eq!(record.individuals, vec!["lee, amy"]);
/// assert_eq!(record.duration_minutes, Some(480));
/// ```
pub fn parse_record(raw_text: &str) -> ShiftRecord {
    let task = TASK_RE
        .captures(raw_text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let raw_individuals: Vec<String> = INDIVIDUAL_RE
        .captures_iter(raw_text)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    let individuals = raw_individuals
        .iter()
        .map(|name| normalize_name(name))
        .collect();

    ShiftRecord {
        task,
        individuals,
        raw_individuals,
        duration_minutes: parse_duration(raw_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let record = parse_record("Task: Stocking<br>Lee, Amy<br>8:00 AM to 4:00 PM");
        assert_eq!(record.task, "Stocking");
        assert_eq!(record.raw_individuals, vec!["Lee, Amy"]);
        assert_eq!(record.individuals, vec!["lee, amy"]);
        assert_eq!(record.duration_minutes, Some(480));
    }

    #[test]
    fn test_task_is_trimmed_and_stops_at_markup() {
        let record = parse_record("Task:   Front Counter  <br>other text");
        assert_eq!(record.task, "Front Counter");
    }

    #[test]
    fn test_task_label_is_case_insensitive() {
        let record = parse_record("task: Cleaning");
        assert_eq!(record.task, "Cleaning");
    }

    #[test]
    fn test_missing_task_is_empty_string() {
        let record = parse_record("Lee, Amy<br>9:00 AM to 5:00 PM");
        assert_eq!(record.task, "");
    }

    #[test]
    fn test_multiple_individuals_in_order() {
        let record = parse_record("Task: Stocking<br>Lee, Amy<br>Smith, John<br>");
        assert_eq!(record.raw_individuals, vec!["Lee, Amy", "Smith, John"]);
        assert_eq!(record.individuals, vec!["lee, amy", "smith, john"]);
    }

    #[test]
    fn test_duplicate_individuals_are_preserved() {
        let record = parse_record("Lee, Amy<br>Lee, Amy<br>");
        assert_eq!(record.raw_individuals, vec!["Lee, Amy", "Lee, Amy"]);
    }

    #[test]
    fn test_individual_at_end_of_text_without_marker() {
        let record = parse_record("Task: Stocking<br>Lee, Amy");
        assert_eq!(record.raw_individuals, vec!["Lee, Amy"]);
    }

    #[test]
    fn test_name_not_followed_by_marker_is_skipped() {
        // The token must end at a <br marker or the end of the text.
        let record = parse_record("Lee, Amy was here<br>");
        assert!(record.raw_individuals.is_empty());
    }

    #[test]
    fn test_no_individuals_yields_empty_sequences() {
        let record = parse_record("Task: Cleaning<br>9:00 AM to 5:00 PM");
        assert!(record.raw_individuals.is_empty());
        assert!(record.individuals.is_empty());
    }

    #[test]
    fn test_parallel_sequences_stay_aligned() {
        let record = parse_record("Ng, Vi<br>SMITH, JOHN<br>");
        assert_eq!(record.individuals.len(), record.raw_individuals.len());
        for (normalized, raw) in record.individuals.iter().zip(&record.raw_individuals) {
            assert_eq!(normalized, &normalize_name(raw));
        }
    }

    #[test]
    fn test_numeric_placeholder_entries_are_captured() {
        // Digit-bearing tokens still match the name grammar; filtering them
        // is a display concern in the comparator, not a parsing concern.
        let record = parse_record("1234, 99<br>Lee, Amy<br>");
        assert_eq!(record.raw_individuals, vec!["1234, 99", "Lee, Amy"]);
    }

    #[test]
    fn test_missing_time_range_leaves_duration_absent() {
        let record = parse_record("Task: Stocking<br>Lee, Amy<br>");
        assert_eq!(record.duration_minutes, None);
    }

    #[test]
    fn test_malformed_time_range_leaves_duration_absent() {
        let record = parse_record("Task: Stocking<br>Lee, Amy<br>9:99 AM to 5:00 PM");
        assert_eq!(record.duration_minutes, None);
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let record = parse_record("");
        assert!(record.is_empty());
    }

    #[test]
    fn test_overnight_record() {
        let record = parse_record("Task: Night Audit<br>Cho, Dan<br>11:00 PM to 7:00 AM");
        assert_eq!(record.duration_minutes, Some(480));
    }
}
