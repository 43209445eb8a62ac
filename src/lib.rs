//! Paycheck calculator.
//!
//! This crate computes a paycheck breakdown (gross pay, itemized tax
//! withholdings and net pay) from an hourly rate, regular and overtime
//! hours, and a configurable table of tax rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod models;
pub mod report;
