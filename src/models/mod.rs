//! Core data models for the benefits engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dependent;
mod employee;
mod paycheck;

pub use dependent::{Dependent, Relationship};
pub use employee::Employee;
pub use paycheck::PaycheckResult;
