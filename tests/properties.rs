//! Property tests for the paycheck calculator and relationship validator.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use benefits_engine::calculation::{
    calculate_deductions, calculate_gross_pay, calculate_paycheck,
};
use benefits_engine::config::DeductionRates;
use benefits_engine::models::{Dependent, Employee, Relationship};
use benefits_engine::validation::validate_relationship;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

/// Salary in cents, up to 500,000.00 a year.
fn arb_salary() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_relationship() -> impl Strategy<Value = Relationship> {
    prop_oneof![
        Just(Relationship::Spouse),
        Just(Relationship::DomesticPartner),
        Just(Relationship::Child),
        Just(Relationship::Other),
    ]
}

fn arb_dependent(id: u32) -> impl Strategy<Value = Dependent> {
    (1930i32..=2026, arb_relationship()).prop_map(move |(birth_year, relationship)| Dependent {
        id,
        first_name: "Dep".to_string(),
        last_name: "Endent".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(birth_year, 6, 15).unwrap(),
        relationship,
    })
}

fn arb_employee() -> impl Strategy<Value = Employee> {
    (arb_salary(), prop::collection::vec(arb_dependent(0), 0..8)).prop_map(
        |(salary, mut dependents)| {
            for (i, dependent) in dependents.iter_mut().enumerate() {
                dependent.id = i as u32 + 1;
            }
            Employee {
                id: 1,
                first_name: "Prop".to_string(),
                last_name: "Erty".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                salary,
                dependents,
            }
        },
    )
}

proptest! {
    #[test]
    fn prop_net_equals_gross_minus_deductions(employee in arb_employee()) {
        let rates = DeductionRates::default();
        let paycheck = calculate_paycheck(&employee, as_of(), &rates);
        prop_assert_eq!(
            paycheck.net_amount,
            paycheck.gross_amount - paycheck.total_deductions
        );
    }

    #[test]
    fn prop_deductions_match_component_formula(employee in arb_employee()) {
        let rates = DeductionRates::default();
        let breakdown = calculate_deductions(&employee, as_of(), &rates);

        let elderly_count = employee
            .dependents
            .iter()
            .filter(|d| 2026 - d.date_of_birth.year() > 50)
            .count();

        prop_assert_eq!(breakdown.base, Decimal::new(1000_00, 2));
        prop_assert_eq!(
            breakdown.dependents,
            Decimal::new(600_00, 2) * Decimal::from(employee.dependents.len())
        );
        prop_assert_eq!(
            breakdown.elderly,
            Decimal::new(200_00, 2) * Decimal::from(elderly_count)
        );
        if employee.salary <= Decimal::from(80_000) {
            prop_assert_eq!(breakdown.high_salary, Decimal::ZERO);
        } else {
            prop_assert!(breakdown.high_salary > Decimal::ZERO);
        }
    }

    #[test]
    fn prop_calculation_is_idempotent(employee in arb_employee()) {
        let rates = DeductionRates::default();
        let first = calculate_paycheck(&employee, as_of(), &rates);
        let second = calculate_paycheck(&employee, as_of(), &rates);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_gross_pay_has_at_most_two_decimals(salary in arb_salary()) {
        let gross = calculate_gross_pay(salary, &DeductionRates::default());
        prop_assert!(gross.scale() <= 2);
    }

    #[test]
    fn prop_gross_pay_within_half_cent_of_exact_division(salary in arb_salary()) {
        let rates = DeductionRates::default();
        let gross = calculate_gross_pay(salary, &rates);
        let exact = salary / rates.pay_periods_per_year;
        let diff = (gross - exact).abs();
        prop_assert!(diff <= Decimal::new(5, 3)); // 0.005
    }

    #[test]
    fn prop_validator_never_allows_two_significant_others(
        existing in prop::collection::vec(arb_dependent(1), 0..6),
        candidate in arb_dependent(99),
    ) {
        let allowed = validate_relationship(&existing, &candidate);
        if allowed && candidate.relationship.is_significant_other() {
            prop_assert!(
                !existing.iter().any(|d| d.relationship.is_significant_other())
            );
        }
    }

    #[test]
    fn prop_validator_always_allows_children_and_others(
        existing in prop::collection::vec(arb_dependent(1), 0..6),
    ) {
        let child = Dependent {
            id: 99,
            first_name: "Kid".to_string(),
            last_name: "Endent".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2015, 2, 2).unwrap(),
            relationship: Relationship::Child,
        };
        prop_assert!(validate_relationship(&existing, &child));
    }
}
