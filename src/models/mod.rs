//! Core data models for the paycheck calculator.

mod pay_inputs;
mod pay_result;

pub use pay_inputs::{DEFAULT_OVERTIME_MODIFIER, PayInputs};
pub use pay_result::{GrossPay, PayResult, TaxWithholding};
