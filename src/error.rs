//! Error types for the benefits engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur across the engine and the
//! employee service.

use thiserror::Error;

/// The main error type for the benefits engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::RelationshipConflict { employee_id: 7 };
/// assert_eq!(
///     error.to_string(),
///     "Employee 7 already has a spouse or domestic partner"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Adding or updating a dependent would give the employee more than one
    /// spouse or domestic partner.
    #[error("Employee {employee_id} already has a spouse or domestic partner")]
    RelationshipConflict {
        /// The id of the employee whose dependent set was being changed.
        employee_id: u32,
    },

    /// No employee exists with the requested id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: u32,
    },

    /// The employee exists but has no dependent with the requested id.
    #[error("Dependent {dependent_id} not found for employee {employee_id}")]
    DependentNotFound {
        /// The id of the owning employee.
        employee_id: u32,
        /// The dependent id that was not found.
        dependent_id: u32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
