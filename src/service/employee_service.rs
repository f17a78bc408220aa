//! Employee service.
//!
//! This module orchestrates the CRUD flows over the repository, applies the
//! relationship rule before persisting dependent changes, and runs the
//! paycheck calculator over stored aggregates.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::calculate_paycheck;
use crate::config::DeductionRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Dependent, Employee, PaycheckResult};
use crate::validation::{ensure_dependent_set_allowed, ensure_relationship_allowed};

use super::EmployeeRepository;

/// Service providing CRUD access to employees and dependents, plus paycheck
/// calculation.
///
/// Dependencies are injected at construction; the service holds no state of
/// its own beyond the repository handle and the rate schedule.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use benefits_engine::config::DeductionRates;
/// use benefits_engine::service::{EmployeeService, InMemoryEmployeeRepository};
///
/// let repository = Arc::new(InMemoryEmployeeRepository::new());
/// let service = EmployeeService::new(repository, DeductionRates::default());
/// assert!(service.get_all_employees().unwrap().is_empty());
/// ```
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    rates: DeductionRates,
}

impl EmployeeService {
    /// Creates a new service over the given repository and rate schedule.
    pub fn new(repository: Arc<dyn EmployeeRepository>, rates: DeductionRates) -> Self {
        Self { repository, rates }
    }

    /// Returns all employee records.
    pub fn get_all_employees(&self) -> EngineResult<Vec<Employee>> {
        self.repository.all()
    }

    /// Returns the employee with the given id.
    pub fn get_employee(&self, id: u32) -> EngineResult<Employee> {
        self.repository
            .get(id)?
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Adds a new employee record.
    ///
    /// The id is supplied by the caller and must not collide with an existing
    /// record; the salary must not be negative; the dependent set, if
    /// supplied, may contain at most one spouse or domestic partner.
    /// Violations are reported before anything is stored.
    pub fn add_employee(&self, employee: Employee) -> EngineResult<Employee> {
        validate_employee(&employee)?;
        if self.repository.get(employee.id)?.is_some() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("employee {} already exists", employee.id),
            });
        }

        let stored = self.repository.insert(employee)?;
        info!(employee_id = stored.id, "Added employee");
        Ok(stored)
    }

    /// Replaces the employee record with the given id.
    ///
    /// The replacement carries its own dependent set, which is validated
    /// against the relationship rule before it overwrites the stored one.
    pub fn update_employee(&self, id: u32, mut employee: Employee) -> EngineResult<Employee> {
        employee.id = id;
        validate_employee(&employee)?;

        let updated = self
            .repository
            .update(id, employee)?
            .ok_or(EngineError::EmployeeNotFound { id })?;
        info!(employee_id = id, "Updated employee");
        Ok(updated)
    }

    /// Deletes the employee record with the given id.
    pub fn delete_employee(&self, id: u32) -> EngineResult<()> {
        if !self.repository.delete(id)? {
            return Err(EngineError::EmployeeNotFound { id });
        }
        info!(employee_id = id, "Deleted employee");
        Ok(())
    }

    /// Returns the dependents of the given employee.
    pub fn get_dependents(&self, employee_id: u32) -> EngineResult<Vec<Dependent>> {
        Ok(self.get_employee(employee_id)?.dependents)
    }

    /// Returns one dependent of the given employee.
    pub fn get_dependent(&self, employee_id: u32, dependent_id: u32) -> EngineResult<Dependent> {
        self.get_employee(employee_id)?
            .dependent(dependent_id)
            .cloned()
            .ok_or(EngineError::DependentNotFound {
                employee_id,
                dependent_id,
            })
    }

    /// Adds a dependent to the given employee.
    ///
    /// The candidate is validated against the employee's full existing
    /// dependent set; a second spouse or domestic partner is rejected with
    /// `RelationshipConflict` and the stored record is left untouched.
    pub fn add_dependent(
        &self,
        employee_id: u32,
        dependent: Dependent,
    ) -> EngineResult<Employee> {
        let mut employee = self.get_employee(employee_id)?;

        if employee.dependent(dependent.id).is_some() {
            return Err(EngineError::InvalidEmployee {
                field: "dependent.id".to_string(),
                message: format!(
                    "employee {} already has a dependent with id {}",
                    employee_id, dependent.id
                ),
            });
        }

        if let Err(e) =
            ensure_relationship_allowed(employee_id, &employee.dependents, &dependent)
        {
            warn!(
                employee_id,
                dependent_id = dependent.id,
                "Rejected dependent: relationship conflict"
            );
            return Err(e);
        }

        employee.dependents.push(dependent);
        let updated = self
            .repository
            .update(employee_id, employee)?
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
        info!(employee_id, "Added dependent");
        Ok(updated)
    }

    /// Replaces one dependent of the given employee.
    ///
    /// Re-validation excludes the record being replaced, so updating an
    /// existing spouse's own entry does not conflict with itself.
    pub fn update_dependent(
        &self,
        employee_id: u32,
        dependent_id: u32,
        mut dependent: Dependent,
    ) -> EngineResult<Employee> {
        let mut employee = self.get_employee(employee_id)?;
        let position = employee
            .dependents
            .iter()
            .position(|d| d.id == dependent_id)
            .ok_or(EngineError::DependentNotFound {
                employee_id,
                dependent_id,
            })?;

        let others: Vec<Dependent> = employee
            .dependents
            .iter()
            .filter(|d| d.id != dependent_id)
            .cloned()
            .collect();
        dependent.id = dependent_id;

        if let Err(e) = ensure_relationship_allowed(employee_id, &others, &dependent) {
            warn!(
                employee_id,
                dependent_id, "Rejected dependent update: relationship conflict"
            );
            return Err(e);
        }

        employee.dependents[position] = dependent;
        let updated = self
            .repository
            .update(employee_id, employee)?
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
        info!(employee_id, dependent_id, "Updated dependent");
        Ok(updated)
    }

    /// Removes one dependent from the given employee.
    pub fn delete_dependent(
        &self,
        employee_id: u32,
        dependent_id: u32,
    ) -> EngineResult<Employee> {
        let mut employee = self.get_employee(employee_id)?;
        let before = employee.dependents.len();
        employee.dependents.retain(|d| d.id != dependent_id);
        if employee.dependents.len() == before {
            return Err(EngineError::DependentNotFound {
                employee_id,
                dependent_id,
            });
        }

        let updated = self
            .repository
            .update(employee_id, employee)?
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
        info!(employee_id, dependent_id, "Deleted dependent");
        Ok(updated)
    }

    /// Calculates the paycheck for the given employee as of today.
    pub fn get_paycheck(&self, employee_id: u32) -> EngineResult<PaycheckResult> {
        self.get_paycheck_as_of(employee_id, Utc::now().date_naive())
    }

    /// Calculates the paycheck for the given employee as of a specific date.
    ///
    /// The date only affects the elderly-dependent surcharge, through the
    /// calendar-year age subtraction.
    pub fn get_paycheck_as_of(
        &self,
        employee_id: u32,
        as_of: NaiveDate,
    ) -> EngineResult<PaycheckResult> {
        let employee = self.get_employee(employee_id)?;
        let paycheck = calculate_paycheck(&employee, as_of, &self.rates);
        info!(
            employee_id,
            gross = %paycheck.gross_amount,
            deductions = %paycheck.total_deductions,
            net = %paycheck.net_amount,
            "Calculated paycheck"
        );
        Ok(paycheck)
    }
}

/// Precondition validation for employee records.
///
/// Malformed input is rejected here, upstream of the calculator; the core
/// assumes validated input. The dependent set travels with the record on
/// employee-level writes, so the one-spouse-or-domestic-partner rule is
/// checked against the whole set as well.
fn validate_employee(employee: &Employee) -> EngineResult<()> {
    if employee.salary < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "salary".to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    ensure_dependent_set_allowed(employee.id, &employee.dependents)
}
