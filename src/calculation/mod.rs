//! Calculation logic for the benefits engine.
//!
//! This module contains all the calculation functions for determining a
//! paycheck, including gross pay, the deduction components (base,
//! per-dependent, high-salary surcharge, and elderly-dependent surcharge),
//! dependent age determination, and the final paycheck assembly.

mod deductions;
mod dependent_age;
mod gross_pay;
mod paycheck;

pub use deductions::{DeductionBreakdown, calculate_deductions};
pub use dependent_age::dependent_age;
pub use gross_pay::calculate_gross_pay;
pub use paycheck::calculate_paycheck;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to 2 decimal places, half away from zero.
///
/// This is the single rounding rule used throughout the engine. It differs
/// from banker's rounding: 1.005 rounds to 1.01, and -1.005 rounds to -1.01.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
