mod fields;
mod schedule;

pub use fields::*;
pub use schedule::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::field::{CronLayout, FieldConfig, FieldName};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Per-field overrides keyed by field name (`minute`, `day_of_week`, ...).
    #[serde(default)]
    pub fields: BTreeMap<String, FieldOverride>,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> crate::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolved configuration for one field: preset plus any override.
    pub fn field(&self, name: FieldName) -> FieldConfig {
        let preset = name.preset();
        match self.fields.get(name.as_str()) {
            Some(ov) => ov.apply(preset),
            None => preset,
        }
    }

    /// Resolved field configurations for every field of `layout`, in order.
    pub fn fields_for(&self, layout: CronLayout) -> Vec<FieldConfig> {
        layout.fields().iter().map(|&name| self.field(name)).collect()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.schedule.timezone.parse::<chrono_tz::Tz>().is_err() {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                field: "schedule.timezone".into(),
                message: format!(
                    "invalid timezone '{}' (use IANA names like 'Europe/Berlin' or 'UTC')",
                    self.schedule.timezone
                ),
            });
        }

        if !PREVIEW_COUNT_RANGE.contains(&self.schedule.preview_count) {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "schedule.preview_count".into(),
                message: format!(
                    "{} is outside {PREVIEW_COUNT_RANGE:?} and will be clamped",
                    self.schedule.preview_count
                ),
            });
        }

        for key in self.fields.keys() {
            if key.parse::<FieldName>().is_err() {
                issues.push(ConfigIssue {
                    severity: ConfigSeverity::Warning,
                    field: format!("fields.{key}"),
                    message: "unknown field name, override is ignored".into(),
                });
            }
        }

        for name in FieldName::ALL {
            let cfg = self.field(name);
            if cfg.min > cfg.max {
                issues.push(ConfigIssue {
                    severity: ConfigSeverity::Error,
                    field: format!("fields.{name}"),
                    message: format!("min {} is greater than max {}", cfg.min, cfg.max),
                });
            }
            if cfg.label.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: ConfigSeverity::Warning,
                    field: format!("fields.{name}.label"),
                    message: "label is empty".into(),
                });
            }
        }

        issues
    }
}
