//! Employee model.
//!
//! This module defines the Employee aggregate: the employee's own fields plus
//! the dependent collection that feeds paycheck calculation and relationship
//! validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Dependent;

/// Represents an employee and their dependent collection.
///
/// The engine operates on a transient in-memory snapshot of this aggregate;
/// ownership of the stored record belongs to the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u32,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Annual salary as a currency amount with 2 decimal places.
    pub salary: Decimal,
    /// The employee's dependents. Insertion order is irrelevant to
    /// calculation.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Employee {
    /// Returns the dependent with the given id, if present.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert!(employee.dependent(3).is_none());
    /// ```
    pub fn dependent(&self, dependent_id: u32) -> Option<&Dependent> {
        self.dependents.iter().find(|d| d.id == dependent_id)
    }
}
