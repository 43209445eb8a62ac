//! Paycheck result models.
//!
//! This module contains the [`PayResult`] type and its associated structures
//! that capture the outputs of a paycheck calculation: the gross breakdown,
//! the itemized withholdings and the net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross pay split into its regular and overtime components.
///
/// # Example
///
/// ```
/// use paycalc::models::GrossPay;
/// use rust_decimal::Decimal;
///
/// let gross = GrossPay {
///     regular: Decimal::from(800),
///     overtime: Decimal::from(150),
///     total: Decimal::from(950),
/// };
/// assert_eq!(gross.regular + gross.overtime, gross.total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPay {
    /// Pay for regular hours.
    pub regular: Decimal,
    /// Pay for overtime hours.
    pub overtime: Decimal,
    /// Regular plus overtime pay.
    pub total: Decimal,
}

/// The amount withheld for one tax category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholding {
    /// The tax category name as it appears in the configuration.
    pub category: String,
    /// The amount withheld.
    pub amount: Decimal,
}

/// The complete result of a paycheck calculation.
///
/// Withholdings are listed in the configuration's tax-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The effective hourly pay rate.
    pub pay_rate: Decimal,
    /// The hourly rate paid for overtime.
    pub overtime_rate: Decimal,
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Gross pay breakdown.
    pub gross: GrossPay,
    /// Itemized withholdings.
    pub taxes: Vec<TaxWithholding>,
    /// Gross pay minus all withholdings.
    pub net: Decimal,
}

impl PayResult {
    /// Returns the sum of all withholdings.
    pub fn total_withheld(&self) -> Decimal {
        self.taxes.iter().map(|t| t.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> PayResult {
        PayResult {
            pay_rate: dec("20.00"),
            overtime_rate: dec("30.000"),
            regular_hours: dec("40"),
            overtime_hours: dec("5"),
            gross: GrossPay {
                regular: dec("800.00"),
                overtime: dec("150.000"),
                total: dec("950.000"),
            },
            taxes: vec![
                TaxWithholding {
                    category: "federal".to_string(),
                    amount: dec("95.0000"),
                },
                TaxWithholding {
                    category: "socialSec".to_string(),
                    amount: dec("58.90000"),
                },
            ],
            net: dec("796.10000"),
        }
    }

    #[test]
    fn test_total_withheld_sums_taxes() {
        assert_eq!(sample_result().total_withheld(), dec("153.90"));
    }

    #[test]
    fn test_net_equals_gross_minus_withheld() {
        let result = sample_result();
        assert_eq!(result.net, result.gross.total - result.total_withheld());
    }

    #[test]
    fn test_pay_result_serialization_keeps_tax_order() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        let federal = json.find("\"federal\"").unwrap();
        let social = json.find("\"socialSec\"").unwrap();
        assert!(federal < social);
        assert!(json.contains("\"gross\":{"));
        assert!(json.contains("\"net\":\"796.10000\""));
    }

    #[test]
    fn test_pay_result_deserialization() {
        let json = r#"{
            "pay_rate": "20",
            "overtime_rate": "30",
            "regular_hours": "40",
            "overtime_hours": "0",
            "gross": {"regular": "800", "overtime": "0", "total": "800"},
            "taxes": [{"category": "federal", "amount": "80"}],
            "net": "720"
        }"#;
        let result: PayResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.gross.total, dec("800"));
        assert_eq!(result.taxes[0].category, "federal");
        assert_eq!(result.net, dec("720"));
    }
}
