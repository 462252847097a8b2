//! Parsed shift record model.
//!
//! This module defines the ShiftRecord struct holding the structured facts
//! extracted from one shift's raw text blob.

use serde::{Deserialize, Serialize};

/// The structured facts recovered from one shift's raw text.
///
/// Records are derived, never persisted: every reconciliation run re-parses
/// its input texts from scratch. The two name sequences are parallel:
/// `individuals[i]` is always the normalized form of `raw_individuals[i]`.
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Free-text task label; empty string if the source had no task label.
    pub task: String,
    /// Normalized names, in order of first appearance in the source text.
    pub individuals: Vec<String>,
    /// Original name strings, same order as `individuals`.
    pub raw_individuals: Vec<String>,
    /// Shift length in minutes, in `[0, 1440)`; `None` if the source text
    /// contains no recognizable time range.
    pub duration_minutes: Option<u32>,
}

impl ShiftRecord {
    /// Returns true if no task, individuals, or duration were recovered.
    pub fn is_empty(&self) -> bool {
        self.task.is_empty() && self.raw_individuals.is_empty() && self.duration_minutes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ShiftRecord {
        ShiftRecord {
            task: "Stocking".to_string(),
            individuals: vec!["lee, amy".to_string()],
            raw_individuals: vec!["Lee, Amy".to_string()],
            duration_minutes: Some(480),
        }
    }

    #[test]
    fn test_is_empty_for_blank_record() {
        let record = ShiftRecord {
            task: String::new(),
            individuals: vec![],
            raw_individuals: vec![],
            duration_minutes: None,
        };
        assert!(record.is_empty());
    }

    #[test]
    fn test_is_not_empty_with_task_only() {
        let record = ShiftRecord {
            task: "Cleaning".to_string(),
            individuals: vec![],
            raw_individuals: vec![],
            duration_minutes: None,
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_is_not_empty_with_duration_only() {
        let record = ShiftRecord {
            task: String::new(),
            individuals: vec![],
            raw_individuals: vec![],
            duration_minutes: Some(0),
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "task": "Stocking",
            "individuals": ["lee, amy"],
            "raw_individuals": ["Lee, Amy"],
            "duration_minutes": 480
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_absent_duration_serializes_as_null() {
        let record = ShiftRecord {
            task: String::new(),
            individuals: vec![],
            raw_individuals: vec![],
            duration_minutes: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"duration_minutes\":null"));
    }
}
