//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    BreakSchedule, BreakScheduleConfig, EngineMetadata, PayRates, PayrollConfig,
};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the break schedule and statutory pay rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── engine.yaml          # Configuration metadata
/// ├── break_schedule.yaml  # Statutory break allowance buckets
/// └── pay_rates.yaml       # Multipliers and statutory rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// let minutes = loader.break_schedule().minutes_for(Decimal::new(8, 0));
/// println!("Break for an 8 hour shift: {} minutes", minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The break schedule violates its structural invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let metadata_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&metadata_path)?;

        // Load break_schedule.yaml and validate its invariants
        let schedule_path = path.join("break_schedule.yaml");
        let schedule_config = Self::load_yaml::<BreakScheduleConfig>(&schedule_path)?;
        let break_schedule = BreakSchedule::new(schedule_config.buckets)?;

        // Load pay_rates.yaml
        let rates_path = path.join("pay_rates.yaml");
        let pay_rates = Self::load_yaml::<PayRates>(&rates_path)?;

        let config = PayrollConfig::new(metadata, break_schedule, pay_rates);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the statutory break schedule.
    pub fn break_schedule(&self) -> &BreakSchedule {
        self.config.break_schedule()
    }

    /// Returns the statutory pay rates.
    pub fn pay_rates(&self) -> &PayRates {
        self.config.pay_rates()
    }
}
