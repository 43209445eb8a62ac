//! HTTP API module for the paycheck calculator.
//!
//! This module exposes the calculation pipeline over HTTP: `POST /calculate`
//! computes a paycheck and `GET /config` returns the effective configuration.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
