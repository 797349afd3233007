//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{ScheduleFile, ScheduleMetadata, StatutoryConfig, TaxTable};

/// Loads and provides access to the statutory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ph_train_2023/
/// ├── schedule.yaml   # Schedule metadata and contribution rules
/// └── tax_table.yaml  # Withholding tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use prominent_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph_train_2023").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// describes an unusable schedule (see [`StatutoryConfig::new`]).
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleFile>(&path.join("schedule.yaml"))?;
        let tax_table = Self::load_yaml::<TaxTable>(&path.join("tax_table.yaml"))?;

        let config = StatutoryConfig::new(schedule.schedule, schedule.contributions, tax_table)?;
        debug!(
            schedule = %config.metadata().code,
            brackets = config.tax_table().brackets.len(),
            "Loaded statutory configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in 2023 TRAIN schedule.
    ///
    /// # Example
    ///
    /// ```
    /// use prominent_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// assert_eq!(loader.metadata().code, "PH-TRAIN-2023");
    /// ```
    pub fn builtin() -> Self {
        Self {
            config: StatutoryConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }
}
