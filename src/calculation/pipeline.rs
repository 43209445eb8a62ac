//! End-to-end paycheck calculation.
//!
//! Resolves the configuration, picks the effective pay rate, and runs the
//! gross, tax and net calculations in order.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{Configuration, resolve};
use crate::error::{PaycalcError, PaycalcResult};
use crate::models::{PayInputs, PayResult};

use super::gross::{compute_gross, overtime_rate};
use super::net::compute_net;
use super::taxes::calculate_taxes;

/// Determines the hourly pay rate to use.
///
/// The caller's rate takes precedence over the configuration's rate.
///
/// # Errors
///
/// Returns `MissingPayRate` when neither supplies one.
pub fn effective_pay_rate(inputs: &PayInputs, config: &Configuration) -> PaycalcResult<Decimal> {
    inputs
        .pay_rate
        .or(config.pay_rate)
        .ok_or(PaycalcError::MissingPayRate)
}

/// Calculates a paycheck against an already-resolved configuration.
///
/// # Errors
///
/// Returns `MissingPayRate` when no pay rate is available, and `Overflow`
/// when an intermediate amount leaves the decimal range.
///
/// # Examples
///
/// ```
/// use paycalc::calculation::calculate_pay;
/// use paycalc::config::Configuration;
/// use paycalc::models::PayInputs;
/// use rust_decimal::Decimal;
///
/// let config = Configuration {
///     pay_rate: Some(Decimal::from(20)),
///     ..Configuration::default()
/// };
/// let result = calculate_pay(&config, &PayInputs::new(Decimal::from(40))).unwrap();
/// assert_eq!(result.gross.total, Decimal::from(800));
/// ```
pub fn calculate_pay(config: &Configuration, inputs: &PayInputs) -> PaycalcResult<PayResult> {
    let pay_rate = effective_pay_rate(inputs, config)?;
    let overtime_rate = overtime_rate(pay_rate, inputs.overtime_modifier)?;

    let gross = compute_gross(
        pay_rate,
        inputs.regular_hours,
        overtime_rate,
        inputs.overtime_hours,
    )?;
    let taxes = calculate_taxes(gross.total, &config.taxes)?;
    let net = compute_net(gross.total, &taxes)?;

    debug!(
        pay_rate = %pay_rate,
        overtime_rate = %overtime_rate,
        gross = %gross.total,
        categories = taxes.len(),
        net = %net,
        "Calculated paycheck"
    );

    Ok(PayResult {
        pay_rate,
        overtime_rate,
        regular_hours: inputs.regular_hours,
        overtime_hours: inputs.overtime_hours,
        gross,
        taxes,
        net,
    })
}

/// Resolves the configuration at `config_path` and calculates a paycheck.
///
/// A missing or malformed configuration file silently yields the built-in
/// configuration (see [`resolve`]).
///
/// # Errors
///
/// Returns `MissingPayRate` when neither `inputs` nor the configuration
/// supplies a pay rate, and `Overflow` as for [`calculate_pay`].
pub fn run(config_path: Option<&Path>, inputs: &PayInputs) -> PaycalcResult<PayResult> {
    let config = resolve(config_path);
    calculate_pay(&config, inputs)
}
