//! Dependent age determination.

use chrono::{Datelike, NaiveDate};

/// Determines a dependent's age in years as of the given date.
///
/// The age is a plain calendar-year subtraction: it does not account for
/// whether the birthday has occurred yet in the `as_of` year. A dependent
/// born in December 1975 is considered 51 throughout 2026, including in
/// January. The elderly-dependent surcharge is defined in terms of this
/// subtraction, so it must not be replaced with a birthday-aware age.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::dependent_age;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1975, 12, 31).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(dependent_age(dob, as_of), 51);
/// ```
pub fn dependent_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    as_of.year() - date_of_birth.year()
}
