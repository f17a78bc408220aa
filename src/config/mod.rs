//! Configuration loading and management for the benefits engine.
//!
//! This module provides the deduction rate schedule and functionality to load
//! it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/deductions.yaml").unwrap();
//! println!("Base deduction: {}", config.rates().base_deduction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DeductionRates;
