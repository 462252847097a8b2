//! Request types for the Shift Reconciliation Engine API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::EmployeeSlotGroup;

/// Request body for the `/reconcile` endpoint.
///
/// Contains the full input snapshot for one reconciliation run: every
/// employee group visible in the reviewed scope, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The employee groups to reconcile, in display order.
    pub groups: Vec<SlotGroupRequest>,
}

/// One employee's slot texts in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotGroupRequest {
    /// Display name of the employee.
    pub employee_name: String,
    /// Raw text blobs for the scheduled timeline, in slot order.
    #[serde(default)]
    pub scheduled: Vec<String>,
    /// Raw text blobs for the worked timeline, in slot order.
    #[serde(default)]
    pub worked: Vec<String>,
}

impl From<SlotGroupRequest> for EmployeeSlotGroup {
    fn from(req: SlotGroupRequest) -> Self {
        EmployeeSlotGroup {
            employee_name: req.employee_name,
            scheduled_raw_texts: req.scheduled,
            worked_raw_texts: req.worked,
        }
    }
}
