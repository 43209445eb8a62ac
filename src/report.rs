//! Human-readable paycheck report.
//!
//! Renders a [`PayResult`] as the multi-line text printed by the `paycalc`
//! command. Currency values are rounded half-to-even to two decimal places.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::models::PayResult;

const SEPARATOR: &str = "---------------------------------------------";

fn two_dp(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn currency(value: Decimal) -> String {
    format!("${}", two_dp(value))
}

/// Title-cases a tax category label.
///
/// The first letter of every run of letters is upper-cased and the rest
/// lower-cased, so `socialSec` becomes `Socialsec`.
///
/// # Example
///
/// ```
/// use paycalc::report::title_case;
///
/// assert_eq!(title_case("federal"), "Federal");
/// assert_eq!(title_case("socialSec"), "Socialsec");
/// assert_eq!(title_case("city_wage"), "City_Wage");
/// ```
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut previous_is_letter = false;

    for c in label.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

/// Renders the paycheck report.
///
/// # Example
///
/// ```
/// use paycalc::calculation::calculate_pay;
/// use paycalc::config::Configuration;
/// use paycalc::models::PayInputs;
/// use paycalc::report::render;
/// use rust_decimal::Decimal;
///
/// let inputs = PayInputs::new(Decimal::from(40)).with_pay_rate(Decimal::from(20));
/// let result = calculate_pay(&Configuration::default(), &inputs).unwrap();
/// let text = render(&result);
/// assert!(text.contains("40.00 hours at $20.00/hr\t==> $800.00"));
/// ```
pub fn render(result: &PayResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(
        out,
        "{} hours at {}/hr\t==> {}",
        two_dp(result.regular_hours),
        currency(result.pay_rate),
        currency(result.gross.regular)
    );
    let _ = writeln!(
        out,
        "{} hours at {}/hr \t==> {}",
        two_dp(result.overtime_hours),
        currency(result.overtime_rate),
        currency(result.gross.overtime)
    );
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "Total (gross):\t\t\t==> {}", currency(result.gross.total));
    let _ = writeln!(out, "{SEPARATOR}");
    for tax in &result.taxes {
        let _ = writeln!(
            out,
            "{}:  \t\t\t==> {}",
            title_case(&tax.category),
            currency(tax.amount)
        );
    }
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "Total (net):\t\t\t==> {}", currency(result.net));
    let _ = writeln!(out, "{SEPARATOR}");

    out
}
