//! Shift Reconciliation Engine for timecard review.
//!
//! This crate reconciles two parallel records of work shifts (a scheduled
//! record and a worked record, each encoded as semi-structured text) and
//! reports discrepancies: missing worked shifts, mismatched task assignments,
//! unauthorized personnel, and duration deviations.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod reconcile;
