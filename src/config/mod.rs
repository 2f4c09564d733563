//! Configuration loading and management for the payroll calculation engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files, including the statutory break schedule and pay rate multipliers.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded config: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakBucket, BreakSchedule, BreakScheduleConfig, EngineMetadata, PayRates, PayrollConfig,
};
