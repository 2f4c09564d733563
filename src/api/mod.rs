//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating payslips
//! and processing work-hour schedules and summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AggregateRequest, PayslipRequest};
pub use response::ApiError;
pub use state::AppState;
