//! Paycheck result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay figures for one biweekly paycheck.
///
/// `gross_amount` and `total_deductions` are each rounded to 2 decimal places
/// (half away from zero). `net_amount` is their difference and is not rounded
/// again; it may be negative when deductions exceed gross pay.
///
/// # Example
///
/// ```
/// use benefits_engine::models::PaycheckResult;
/// use rust_decimal::Decimal;
///
/// let paycheck = PaycheckResult {
///     gross_amount: Decimal::new(2900_81, 2),
///     total_deductions: Decimal::new(1000_00, 2),
///     net_amount: Decimal::new(1900_81, 2),
/// };
/// assert_eq!(
///     paycheck.net_amount,
///     paycheck.gross_amount - paycheck.total_deductions
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Pre-deduction pay for one period.
    pub gross_amount: Decimal,
    /// Sum of base, per-dependent, high-salary, and elderly-dependent
    /// deductions.
    pub total_deductions: Decimal,
    /// Gross minus deductions; may be negative.
    pub net_amount: Decimal,
}
