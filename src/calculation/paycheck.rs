//! Paycheck assembly.
//!
//! This module combines gross pay and deductions into a [`PaycheckResult`].

use chrono::NaiveDate;

use crate::config::DeductionRates;
use crate::models::{Employee, PaycheckResult};

use super::{calculate_deductions, calculate_gross_pay};

/// Calculates the paycheck for one employee snapshot.
///
/// Pure function of the snapshot, the `as_of` date, and the rate schedule:
/// it performs no I/O, never fails for well-formed input (salary ≥ 0, valid
/// dates), and is idempotent for unchanged inputs. The net amount is the
/// difference of the two already-rounded figures and is not rounded again;
/// it may be negative, which is a valid outcome.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck;
/// use benefits_engine::config::DeductionRates;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "Ada".to_string(),
///     last_name: "Nguyen".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 11, 2).unwrap(),
///     salary: Decimal::new(75_420_99, 2),
///     dependents: vec![],
/// };
/// let as_of = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let paycheck = calculate_paycheck(&employee, as_of, &DeductionRates::default());
/// assert_eq!(paycheck.gross_amount, Decimal::new(2900_81, 2));
/// assert_eq!(paycheck.net_amount, Decimal::new(1900_81, 2));
/// ```
pub fn calculate_paycheck(
    employee: &Employee,
    as_of: NaiveDate,
    rates: &DeductionRates,
) -> PaycheckResult {
    let gross_amount = calculate_gross_pay(employee.salary, rates);
    let total_deductions = calculate_deductions(employee, as_of, rates).total;
    let net_amount = gross_amount - total_deductions;

    PaycheckResult {
        gross_amount,
        total_deductions,
        net_amount,
    }
}
