//! Net pay calculation.

use rust_decimal::Decimal;

use crate::error::{PaycalcError, PaycalcResult};
use crate::models::TaxWithholding;

/// Subtracts every withholding from gross pay, in the order given.
///
/// # Errors
///
/// Returns `Overflow` if the running net leaves the decimal range, which
/// only happens with negative withholdings.
///
/// # Examples
///
/// ```
/// use paycalc::calculation::compute_net;
/// use paycalc::models::TaxWithholding;
/// use rust_decimal::Decimal;
///
/// let taxes = vec![
///     TaxWithholding { category: "federal".to_string(), amount: Decimal::from(95) },
///     TaxWithholding { category: "socialSec".to_string(), amount: Decimal::new(5890, 2) },
/// ];
/// assert_eq!(compute_net(Decimal::from(950), &taxes).unwrap(), Decimal::new(79610, 2));
/// ```
pub fn compute_net(gross: Decimal, taxes: &[TaxWithholding]) -> PaycalcResult<Decimal> {
    taxes.iter().try_fold(gross, |net, tax| {
        net.checked_sub(tax.amount)
            .ok_or_else(|| PaycalcError::Overflow {
                quantity: "net pay".to_string(),
            })
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

    fn withholding(category: &str, amount: &str) -> TaxWithholding {
        TaxWithholding {
            category: category.to_string(),
            amount: dec(amount),
        }
    }

    #[test]
    fn test_no_taxes_net_equals_gross() {
        assert_eq!(compute_net(dec("812.40"), &[]).unwrap(), dec("812.40"));
    }

    #[test]
    fn test_subtracts_every_withholding() {
        let taxes = vec![
            withholding("federal", "91.70"),
            withholding("state", "43.50"),
            withholding("local", "0"),
            withholding("socialSec", "62.00"),
            withholding("medicare", "14.50"),
        ];
        assert_eq!(compute_net(dec("1000"), &taxes).unwrap(), dec("788.30"));
    }

    #[test]
    fn test_negative_withholding_increases_net() {
        let taxes = vec![withholding("credit", "-5")];
        assert_eq!(compute_net(dec("100"), &taxes).unwrap(), dec("105"));
    }

    #[test]
    fn test_negative_withholding_past_max_is_overflow_error() {
        let taxes = vec![TaxWithholding {
            category: "credit".to_string(),
            amount: -Decimal::MAX,
        }];

        assert!(matches!(
            compute_net(dec("1"), &taxes),
            Err(PaycalcError::Overflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_net_is_gross_minus_sum(
            gross_cents in -1_000_000i64..10_000_000,
            amounts in proptest::collection::vec(0i64..1_000_000, 0..10),
        ) {
            let gross = Decimal::new(gross_cents, 2);
            let taxes: Vec<TaxWithholding> = amounts
                .iter()
                .enumerate()
                .map(|(i, cents)| TaxWithholding {
                    category: format!("tax{i}"),
                    amount: Decimal::new(*cents, 2),
                })
                .collect();
            let sum: Decimal = taxes.iter().map(|t| t.amount).sum();

            prop_assert_eq!(compute_net(gross, &taxes).unwrap(), gross - sum);
        }
    }
}
