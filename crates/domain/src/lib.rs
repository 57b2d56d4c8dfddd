//! Shared types for the mccron workspace: field configuration, layouts,
//! the TOML configuration file and the common error type.

pub mod config;
pub mod error;
pub mod field;

pub use error::{Error, Result};
pub use field::{CronLayout, FieldConfig, FieldName, FieldOption, SpecialValue};
