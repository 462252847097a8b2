//! HTTP API module for the Shift Reconciliation Engine.
//!
//! This module provides the REST API endpoint that triggers a
//! reconciliation run against a submitted input snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReconcileRequest, SlotGroupRequest};
pub use response::{ApiError, ReconcileResponse};
pub use state::AppState;
