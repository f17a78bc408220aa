//! Dependent model and related types.
//!
//! This module defines the Dependent struct and Relationship enum for
//! representing the people covered by an employee's benefits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classifies a dependent's relationship to the employee.
///
/// The `Spouse` and `DomesticPartner` categories form a combined group for
/// validation purposes: an employee may have at most one dependent from that
/// group, never one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The employee's spouse.
    Spouse,
    /// The employee's domestic partner.
    DomesticPartner,
    /// A child of the employee.
    Child,
    /// Any other covered dependent.
    Other,
}

impl Relationship {
    /// Returns true if this relationship counts toward the
    /// one-spouse-or-domestic-partner limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::Relationship;
    ///
    /// assert!(Relationship::Spouse.is_significant_other());
    /// assert!(Relationship::DomesticPartner.is_significant_other());
    /// assert!(!Relationship::Child.is_significant_other());
    /// ```
    pub fn is_significant_other(&self) -> bool {
        matches!(self, Relationship::Spouse | Relationship::DomesticPartner)
    }
}

/// Represents a dependent covered by an employee's benefits.
///
/// Dependents are addressed only through the owning employee's collection;
/// the id is unique within that collection, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    /// Identifier, unique within the owning employee's dependent set.
    pub id: u32,
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// The dependent's relationship to the employee.
    pub relationship: Relationship,
}
