//! Paycheck deduction calculation.
//!
//! This module accumulates the four deduction components and applies the
//! single final rounding step.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::Employee;

use super::{dependent_age, round_currency};

/// The individual deduction components for one paycheck.
///
/// The components are kept unrounded; only `total` carries the single
/// 2-decimal rounding applied after all additions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionBreakdown {
    /// The fixed base deduction.
    pub base: Decimal,
    /// The per-dependent deduction for all dependents.
    pub dependents: Decimal,
    /// The per-period share of the high-salary surcharge, or zero.
    pub high_salary: Decimal,
    /// The surcharge for dependents over the elderly age threshold.
    pub elderly: Decimal,
    /// The sum of all components, rounded once to 2 decimal places
    /// half away from zero.
    pub total: Decimal,
}

/// Calculates the total deductions for one paycheck.
///
/// The components, accumulated before rounding:
/// 1. The fixed base deduction (1000.00 under the standard schedule).
/// 2. The per-dependent deduction times the number of dependents,
///    regardless of relationship.
/// 3. If the salary exceeds the high-salary threshold, the surcharge rate
///    applied to the full salary and spread across the pay periods.
/// 4. The elderly surcharge for each dependent whose age, as a calendar-year
///    subtraction against `as_of`, exceeds the elderly age threshold.
///
/// The total is rounded once, after all additions.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_deductions;
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
/// let breakdown = calculate_deductions(&employee, as_of, &DeductionRates::default());
/// assert_eq!(breakdown.total, Decimal::new(1000_00, 2));
/// ```
pub fn calculate_deductions(
    employee: &Employee,
    as_of: NaiveDate,
    rates: &DeductionRates,
) -> DeductionBreakdown {
    let base = rates.base_deduction;

    let dependents = rates.per_dependent * Decimal::from(employee.dependents.len());

    let high_salary = if employee.salary > rates.high_salary_threshold {
        (employee.salary * rates.high_salary_rate) / rates.pay_periods_per_year
    } else {
        Decimal::ZERO
    };

    let elderly_count = employee
        .dependents
        .iter()
        .filter(|d| dependent_age(d.date_of_birth, as_of) > rates.elderly_age_threshold)
        .count();
    let elderly = rates.elderly_surcharge * Decimal::from(elderly_count);

    let total = round_currency(base + dependents + high_salary + elderly);

    DeductionBreakdown {
        base,
        dependents,
        high_salary,
        elderly,
        total,
    }
}
