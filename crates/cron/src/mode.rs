use std::fmt;

use mc_domain::FieldConfig;
use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field value
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The text of one cron field. Replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CronFieldValue(String);

impl CronFieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CronFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CronFieldValue {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for CronFieldValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CronFieldValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Editing modes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Structured form of a cron field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CronFieldMode {
    /// `*`
    Any,
    /// `7`
    Specific { value: u32 },
    /// `10-20`
    Range { start: u32, end: u32 },
    /// `*/5` or `3/5`. A `start` equal to the field minimum renders as `*`.
    Interval { start: u32, step: u32 },
    /// `1,3,5`, in the order given.
    List { values: Vec<u32> },
    /// Anything the classifier could not structure.
    Raw { raw: String },
}

impl CronFieldMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            CronFieldMode::Any => ModeKind::Any,
            CronFieldMode::Specific { .. } => ModeKind::Specific,
            CronFieldMode::Range { .. } => ModeKind::Range,
            CronFieldMode::Interval { .. } => ModeKind::Interval,
            CronFieldMode::List { .. } => ModeKind::List,
            CronFieldMode::Raw { .. } => ModeKind::Raw,
        }
    }
}

/// Discriminant of [`CronFieldMode`], as offered by a mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Any,
    Specific,
    Range,
    Interval,
    List,
    Raw,
}

impl ModeKind {
    pub const ALL: [ModeKind; 6] = [
        ModeKind::Any,
        ModeKind::Specific,
        ModeKind::Range,
        ModeKind::Interval,
        ModeKind::List,
        ModeKind::Raw,
    ];

    /// Fresh parameters for this mode, seeded from the field bounds.
    ///
    /// `current` is only used by [`ModeKind::Raw`], which starts from the
    /// text the field holds right now.
    pub fn seed(self, config: &FieldConfig, current: &CronFieldValue) -> CronFieldMode {
        match self {
            ModeKind::Any => CronFieldMode::Any,
            ModeKind::Specific => CronFieldMode::Specific { value: config.min },
            ModeKind::Range => CronFieldMode::Range {
                start: config.min,
                end: config.max,
            },
            ModeKind::Interval => CronFieldMode::Interval {
                start: config.min,
                step: 1,
            },
            ModeKind::List => CronFieldMode::List {
                values: vec![config.min],
            },
            ModeKind::Raw => CronFieldMode::Raw {
                raw: current.as_str().to_owned(),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Any => "any",
            ModeKind::Specific => "specific",
            ModeKind::Range => "range",
            ModeKind::Interval => "interval",
            ModeKind::List => "list",
            ModeKind::Raw => "raw",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
