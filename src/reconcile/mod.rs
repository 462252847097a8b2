//! Reconciliation logic for the Shift Reconciliation Engine.
//!
//! This module contains the per-slot comparator and the runner that
//! orchestrates comparison across all slots and employees, turning pairs of
//! parsed records into an ordered list of discrepancy reports.

mod comparator;
mod runner;

pub use comparator::compare_slot;
pub use runner::Reconciler;
