//! Employee service layer for the benefits engine.
//!
//! This module provides CRUD access to employee and dependent records on top
//! of a pluggable repository, and runs the paycheck calculator over stored
//! aggregates. Persistence mechanics stay behind the [`EmployeeRepository`]
//! trait; the in-memory implementation ships for tests and embedding.

mod employee_service;
mod repository;

pub use employee_service::EmployeeService;
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository};
