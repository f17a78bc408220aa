//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the deduction
//! rate schedule from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::DeductionRates;

/// Loads and provides access to the deduction rate schedule.
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/deductions.yaml")?;
/// let rates = loader.rates();
/// println!("Per-dependent deduction: ${}", rates.per_dependent);
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rates: DeductionRates,
}

impl ConfigLoader {
    /// Loads the rate schedule from the specified YAML file.
    ///
    /// Fields missing from the file fall back to the standard schedule.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { rates })
    }

    /// Returns the loaded rate schedule.
    pub fn rates(&self) -> &DeductionRates {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load("./config/deductions.yaml").unwrap();
        assert_eq!(loader.rates(), &DeductionRates::default());
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist.yaml");
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("benefits_engine_bad_config.yaml");
        fs::write(&path, "base_deduction: [not, a, decimal]").unwrap();

        let result = ConfigLoader::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_default_loader_uses_standard_schedule() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.rates().base_deduction, Decimal::new(1000_00, 2));
    }
}
