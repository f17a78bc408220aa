//! Paycheck deduction engine for employee benefits.
//!
//! This crate computes an employee's per-paycheck compensation by applying a
//! fixed set of deduction rules to the employee and their dependents, and
//! enforces the one-spouse-or-domestic-partner rule on an employee's
//! dependent set.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod validation;
