//! Gross pay calculation.
//!
//! Regular hours are paid at the base rate; overtime hours are paid at the
//! base rate scaled by the overtime modifier.

use rust_decimal::Decimal;

use crate::error::{PaycalcError, PaycalcResult};
use crate::models::GrossPay;

fn overflow(quantity: &str) -> PaycalcError {
    PaycalcError::Overflow {
        quantity: quantity.to_string(),
    }
}

/// Returns the hourly overtime rate for a base pay rate and modifier.
///
/// # Errors
///
/// Returns `Overflow` if the product is outside the decimal range.
///
/// # Examples
///
/// ```
/// use paycalc::calculation::overtime_rate;
/// use rust_decimal::Decimal;
///
/// let rate = overtime_rate(Decimal::from(20), Decimal::new(15, 1)).unwrap();
/// assert_eq!(rate, Decimal::from(30));
/// ```
pub fn overtime_rate(pay_rate: Decimal, overtime_modifier: Decimal) -> PaycalcResult<Decimal> {
    pay_rate
        .checked_mul(overtime_modifier)
        .ok_or_else(|| overflow("overtime rate"))
}

/// Computes the regular, overtime and total gross pay.
///
/// No input is validated; zero or negative values pass straight through
/// the arithmetic.
///
/// # Arguments
///
/// * `pay_rate` - The base hourly rate
/// * `regular_hours` - Hours paid at the base rate
/// * `overtime_rate` - The hourly rate for overtime (see [`overtime_rate()`])
/// * `overtime_hours` - Hours paid at the overtime rate
///
/// # Errors
///
/// Returns `Overflow` if any component is outside the decimal range.
///
/// # Examples
///
/// ```
/// use paycalc::calculation::compute_gross;
/// use rust_decimal::Decimal;
///
/// let gross = compute_gross(
///     Decimal::from(20),
///     Decimal::from(40),
///     Decimal::from(30),
///     Decimal::from(5),
/// )
/// .unwrap();
/// assert_eq!(gross.regular, Decimal::from(800));
/// assert_eq!(gross.overtime, Decimal::from(150));
/// assert_eq!(gross.total, Decimal::from(950));
/// ```
pub fn compute_gross(
    pay_rate: Decimal,
    regular_hours: Decimal,
    overtime_rate: Decimal,
    overtime_hours: Decimal,
) -> PaycalcResult<GrossPay> {
    let regular = pay_rate
        .checked_mul(regular_hours)
        .ok_or_else(|| overflow("regular gross"))?;
    let overtime = overtime_rate
        .checked_mul(overtime_hours)
        .ok_or_else(|| overflow("overtime gross"))?;
    let total = regular
        .checked_add(overtime)
        .ok_or_else(|| overflow("total gross"))?;

    Ok(GrossPay {
        regular,
        overtime,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_regular_hours_only() {
        let gross =
            compute_gross(dec("28.54"), dec("38"), dec("42.81"), Decimal::ZERO).unwrap();

        assert_eq!(gross.regular, dec("1084.52"));
        assert_eq!(gross.overtime, Decimal::ZERO);
        assert_eq!(gross.total, dec("1084.52"));
    }

    #[test]
    fn test_regular_and_overtime() {
        let rate = dec("20.00");
        let ot_rate = overtime_rate(rate, dec("1.5")).unwrap();
        let gross = compute_gross(rate, dec("40"), ot_rate, dec("5")).unwrap();

        assert_eq!(ot_rate, dec("30"));
        assert_eq!(gross.regular, dec("800"));
        assert_eq!(gross.overtime, dec("150"));
        assert_eq!(gross.total, dec("950"));
    }

    #[test]
    fn test_fractional_hours() {
        let gross =
            compute_gross(dec("18.25"), dec("7.5"), dec("36.50"), dec("0.25")).unwrap();

        assert_eq!(gross.regular, dec("136.875"));
        assert_eq!(gross.overtime, dec("9.125"));
        assert_eq!(gross.total, dec("146.00"));
    }

    #[test]
    fn test_negative_hours_pass_through() {
        let gross = compute_gross(dec("20"), dec("-2"), dec("30"), Decimal::ZERO).unwrap();
        assert_eq!(gross.total, dec("-40"));
    }

    #[test]
    fn test_double_time_modifier() {
        assert_eq!(overtime_rate(dec("25.00"), dec("2")).unwrap(), dec("50"));
    }

    #[test]
    fn test_huge_rate_times_hours_is_overflow_error() {
        let result = compute_gross(Decimal::MAX, dec("40"), Decimal::ZERO, Decimal::ZERO);

        match result {
            Err(PaycalcError::Overflow { quantity }) => assert_eq!(quantity, "regular gross"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_overtime_rate_is_overflow_error() {
        assert!(matches!(
            overtime_rate(Decimal::MAX, dec("1.5")),
            Err(PaycalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_sum_of_components_overflow_is_error() {
        let result = compute_gross(Decimal::MAX, Decimal::ONE, Decimal::MAX, Decimal::ONE);

        match result {
            Err(PaycalcError::Overflow { quantity }) => assert_eq!(quantity, "total gross"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_total_is_rate_times_hours_plus_overtime(
            rate_cents in 0i64..100_000,
            reg_quarters in 0i64..400,
            ot_quarters in 0i64..200,
            modifier_tenths in 10i64..30,
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let reg = Decimal::new(reg_quarters * 25, 2);
            let ot = Decimal::new(ot_quarters * 25, 2);
            let modifier = Decimal::new(modifier_tenths, 1);

            let ot_rate = overtime_rate(rate, modifier).unwrap();
            let gross = compute_gross(rate, reg, ot_rate, ot).unwrap();

            prop_assert_eq!(gross.total, rate * reg + rate * modifier * ot);
            prop_assert_eq!(gross.total, gross.regular + gross.overtime);
        }
    }
}
