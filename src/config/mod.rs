//! Configuration for the payroll engine.
//!
//! Statutory contribution rules and the withholding tax table are loaded
//! from YAML files, or taken from the built-in 2023 TRAIN schedule.
//! Server settings come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use prominent_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph_train_2023").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use types::{
    ContributionSchedule, PagIbigRule, PhilHealthRule, ScheduleMetadata, SssRule,
    StatutoryConfig, TaxBracket, TaxTable,
};
