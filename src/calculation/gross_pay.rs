//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::config::DeductionRates;

use super::round_currency;

/// Calculates the gross pay for one period.
///
/// The annual salary is divided evenly across the configured pay periods
/// (26 biweekly paychecks under the standard schedule) and rounded to
/// 2 decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_gross_pay;
/// use benefits_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
/// let gross = calculate_gross_pay(Decimal::new(75_420_99, 2), &rates);
/// assert_eq!(gross, Decimal::new(2900_81, 2));
/// ```
pub fn calculate_gross_pay(salary: Decimal, rates: &DeductionRates) -> Decimal {
    round_currency(salary / rates.pay_periods_per_year)
}
