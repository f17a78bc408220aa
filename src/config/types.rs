//! Configuration types for the deduction rate schedule.
//!
//! This module contains the strongly-typed rate schedule that is deserialized
//! from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The deduction rate schedule applied to every paycheck.
///
/// [`DeductionRates::default`] yields the standard benefit rules: 26 biweekly
/// pay periods per year, a 1000.00 base deduction, 600.00 per dependent, a 2%
/// annual surcharge on salaries above 80000, and 200.00 per dependent over
/// age 50.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeductionRates {
    /// Number of paychecks per year; gross pay is salary divided by this.
    pub pay_periods_per_year: Decimal,
    /// Fixed deduction applied to every paycheck.
    pub base_deduction: Decimal,
    /// Deduction per dependent, regardless of relationship.
    pub per_dependent: Decimal,
    /// Annual salary above which the high-salary surcharge applies.
    pub high_salary_threshold: Decimal,
    /// Annual surcharge rate applied to the full salary when above the
    /// threshold, spread across the pay periods.
    pub high_salary_rate: Decimal,
    /// Dependents strictly older than this (in whole calendar years) incur
    /// the elderly surcharge.
    pub elderly_age_threshold: i32,
    /// Per-paycheck surcharge for each elderly dependent.
    pub elderly_surcharge: Decimal,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            pay_periods_per_year: Decimal::from(26),
            base_deduction: Decimal::new(1000_00, 2),
            per_dependent: Decimal::new(600_00, 2),
            high_salary_threshold: Decimal::from(80_000),
            high_salary_rate: Decimal::new(2, 2),
            elderly_age_threshold: 50,
            elderly_surcharge: Decimal::new(200_00, 2),
        }
    }
}
