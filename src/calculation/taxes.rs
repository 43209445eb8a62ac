//! Tax withholding calculation.

use rust_decimal::Decimal;

use crate::config::TaxTable;
use crate::error::{PaycalcError, PaycalcResult};
use crate::models::TaxWithholding;

/// Computes the amount withheld for every category in a tax table.
///
/// Each category yields `gross * rate`, in table order. Nothing is dropped,
/// reordered or merged, and rates are not checked: a zero rate yields a zero
/// withholding and a negative rate yields a negative one.
///
/// # Errors
///
/// Returns `Overflow` naming the category whose amount is outside the
/// decimal range.
///
/// # Examples
///
/// ```
/// use paycalc::calculation::calculate_taxes;
/// use paycalc::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let rates: TaxTable = [("federal", Decimal::new(10, 2)), ("socialSec", Decimal::new(62, 3))]
///     .into_iter()
///     .collect();
///
/// let taxes = calculate_taxes(Decimal::from(950), &rates).unwrap();
/// assert_eq!(taxes[0].category, "federal");
/// assert_eq!(taxes[0].amount, Decimal::new(9500, 2));
/// assert_eq!(taxes[1].amount, Decimal::new(5890, 2));
/// ```
pub fn calculate_taxes(gross: Decimal, rates: &TaxTable) -> PaycalcResult<Vec<TaxWithholding>> {
    rates
        .iter()
        .map(|(category, rate)| {
            let amount = gross
                .checked_mul(rate)
                .ok_or_else(|| PaycalcError::Overflow {
                    quantity: format!("{} withholding", category),
                })?;
            Ok(TaxWithholding {
                category: category.to_string(),
                amount,
            })
        })
        .collect()
}
