//! Dependent relationship validation.
//!
//! This module enforces the one-spouse-or-domestic-partner rule: within one
//! employee's dependent set, at most one dependent may be a spouse or a
//! domestic partner, as a combined group. An employee with a spouse cannot
//! also add a domestic partner.

use crate::error::{EngineError, EngineResult};
use crate::models::Dependent;

/// Checks whether a candidate dependent may join the existing set.
///
/// Returns `false` if the candidate is a spouse or domestic partner and the
/// existing set already contains one; `true` otherwise. Purely evaluative,
/// no side effects.
///
/// When re-validating an update to an existing dependent, the caller must
/// exclude that dependent's own prior entry from `existing`, otherwise a
/// spouse validated against their own record would always be rejected.
///
/// # Examples
///
/// ```
/// use benefits_engine::models::{Dependent, Relationship};
/// use benefits_engine::validation::validate_relationship;
/// use chrono::NaiveDate;
///
/// let spouse = Dependent {
///     id: 1,
///     first_name: "Sam".to_string(),
///     last_name: "Nguyen".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1986, 7, 21).unwrap(),
///     relationship: Relationship::Spouse,
/// };
/// assert!(validate_relationship(&[], &spouse));
///
/// let partner = Dependent {
///     id: 2,
///     relationship: Relationship::DomesticPartner,
///     ..spouse.clone()
/// };
/// assert!(!validate_relationship(&[spouse], &partner));
/// ```
pub fn validate_relationship(existing: &[Dependent], candidate: &Dependent) -> bool {
    if !candidate.relationship.is_significant_other() {
        return true;
    }

    !existing
        .iter()
        .any(|d| d.relationship.is_significant_other())
}

/// Checks the relationship rule and maps a violation to an error.
///
/// This is the form the service layer uses: a conflict becomes
/// [`EngineError::RelationshipConflict`] and the caller must not apply the
/// mutation. The conflict is not retryable; the caller has to pick a
/// different relationship or remove the existing spouse or domestic partner
/// first.
pub fn ensure_relationship_allowed(
    employee_id: u32,
    existing: &[Dependent],
    candidate: &Dependent,
) -> EngineResult<()> {
    if validate_relationship(existing, candidate) {
        Ok(())
    } else {
        Err(EngineError::RelationshipConflict { employee_id })
    }
}

/// Checks whether a whole dependent set satisfies the
/// one-spouse-or-domestic-partner rule.
///
/// Employee-level writes accept a fully-populated dependent set rather than
/// one candidate at a time; this form guards those paths, where
/// [`validate_relationship`] guards the incremental ones.
///
/// # Examples
///
/// ```
/// use benefits_engine::models::{Dependent, Relationship};
/// use benefits_engine::validation::validate_dependent_set;
/// use chrono::NaiveDate;
///
/// let spouse = Dependent {
///     id: 1,
///     first_name: "Sam".to_string(),
///     last_name: "Nguyen".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1986, 7, 21).unwrap(),
///     relationship: Relationship::Spouse,
/// };
/// let partner = Dependent {
///     id: 2,
///     relationship: Relationship::DomesticPartner,
///     ..spouse.clone()
/// };
/// assert!(validate_dependent_set(&[spouse.clone()]));
/// assert!(!validate_dependent_set(&[spouse, partner]));
/// ```
pub fn validate_dependent_set(dependents: &[Dependent]) -> bool {
    dependents
        .iter()
        .filter(|d| d.relationship.is_significant_other())
        .count()
        <= 1
}

/// Checks a whole dependent set and maps a violation to an error.
///
/// Used by the employee add/update flows, which would otherwise bypass the
/// rule by persisting a pre-populated dependent set.
pub fn ensure_dependent_set_allowed(
    employee_id: u32,
    dependents: &[Dependent],
) -> EngineResult<()> {
    if validate_dependent_set(dependents) {
        Ok(())
    } else {
        Err(EngineError::RelationshipConflict { employee_id })
    }
}
