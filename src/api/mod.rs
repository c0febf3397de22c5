//! HTTP API module for the Attendance Penalty Engine.
//!
//! This module provides the REST API endpoint for calculating attendance
//! penalties for payroll deductions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
