//! Pay input model.
//!
//! This module contains the [`PayInputs`] type describing the hours worked
//! and the optional pay rate supplied by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The overtime modifier used when the caller does not supply one.
pub const DEFAULT_OVERTIME_MODIFIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

fn default_overtime_modifier() -> Decimal {
    DEFAULT_OVERTIME_MODIFIER
}

/// Externally supplied inputs for a single paycheck.
///
/// # Example
///
/// ```
/// use paycalc::models::PayInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = PayInputs::new(Decimal::from(40))
///     .with_pay_rate(Decimal::from(20))
///     .with_overtime_hours(Decimal::from(5));
///
/// assert_eq!(inputs.overtime_modifier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInputs {
    /// Hourly pay rate; takes precedence over the configuration's rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_rate: Option<Decimal>,
    /// Number of regular hours worked.
    pub regular_hours: Decimal,
    /// Number of overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Multiplier applied to the pay rate for overtime hours.
    #[serde(default = "default_overtime_modifier")]
    pub overtime_modifier: Decimal,
}

impl PayInputs {
    /// Creates inputs for the given regular hours with no overtime, no
    /// explicit pay rate and the default overtime modifier.
    pub fn new(regular_hours: Decimal) -> Self {
        Self {
            pay_rate: None,
            regular_hours,
            overtime_hours: Decimal::ZERO,
            overtime_modifier: DEFAULT_OVERTIME_MODIFIER,
        }
    }

    /// Sets the explicit pay rate.
    pub fn with_pay_rate(mut self, pay_rate: Decimal) -> Self {
        self.pay_rate = Some(pay_rate);
        self
    }

    /// Sets the overtime hours.
    pub fn with_overtime_hours(mut self, overtime_hours: Decimal) -> Self {
        self.overtime_hours = overtime_hours;
        self
    }

    /// Sets the overtime modifier.
    pub fn with_overtime_modifier(mut self, overtime_modifier: Decimal) -> Self {
        self.overtime_modifier = overtime_modifier;
        self
    }
}
