//! Calculation logic for the paycheck calculator.
//!
//! This module contains the gross pay, tax withholding and net pay
//! calculations, plus the pipeline that combines them with configuration
//! resolution.

mod gross;
mod net;
mod pipeline;
mod taxes;

pub use gross::{compute_gross, overtime_rate};
pub use net::compute_net;
pub use pipeline::{calculate_pay, effective_pay_rate, run};
pub use taxes::calculate_taxes;
