//! Core data models for the Shift Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod discrepancy;
mod shift_record;
mod slot_group;

pub use discrepancy::{DiscrepancyKind, DiscrepancyReport};
pub use shift_record::ShiftRecord;
pub use slot_group::{EmployeeSlotGroup, GroupOutcome, ReconciliationOutcome};
