use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A named value shown in place of a number (e.g. `MON` for 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: u32,
    pub label: String,
}

/// A non-numeric alias the backend scheduler accepts. Documented for the
/// user; the codec does not parse these structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialValue {
    pub value: String,
    pub description: String,
}

/// Static description of one cron field: label, inclusive bounds and
/// optional display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    pub min: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_values: Vec<SpecialValue>,
}

impl FieldConfig {
    pub fn new(label: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            options: Vec::new(),
            special_values: Vec::new(),
        }
    }

    pub fn with_options<I, S>(mut self, start: u32, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = labels
            .into_iter()
            .zip(start..)
            .map(|(label, value)| FieldOption {
                value,
                label: label.into(),
            })
            .collect();
        self
    }

    pub fn with_special(mut self, value: &str, description: &str) -> Self {
        self.special_values.push(SpecialValue {
            value: value.into(),
            description: description.into(),
        });
        self
    }

    /// Whether `n` lies within `[min, max]`.
    pub fn contains(&self, n: u32) -> bool {
        n >= self.min && n <= self.max
    }

    /// Clamp `n` into `[min, max]`.
    pub fn clamp(&self, n: u32) -> u32 {
        n.max(self.min).min(self.max.max(self.min))
    }

    /// Resolve an option label (case-insensitive) to its numeric value.
    pub fn option_value(&self, name: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(name))
            .map(|o| o.value)
    }

    /// Display label for `n`, if the field has one.
    pub fn option_label(&self, n: u32) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == n)
            .map(|o| o.label.as_str())
    }

    // ── Presets ──────────────────────────────────────────────────────

    pub fn second() -> Self {
        Self::new("Second", 0, 59)
    }

    pub fn minute() -> Self {
        Self::new("Minute", 0, 59)
    }

    pub fn hour() -> Self {
        Self::new("Hour", 0, 23)
    }

    pub fn day_of_month() -> Self {
        Self::new("Day of month", 1, 31)
            .with_special("L", "last day of the month")
            .with_special("?", "no specific value")
    }

    pub fn month() -> Self {
        Self::new("Month", 1, 12)
            .with_options(
                1,
                [
                    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT",
                    "NOV", "DEC",
                ],
            )
            .with_special("JAN-DEC", "month names, e.g. JAN-JUN")
    }

    pub fn day_of_week() -> Self {
        Self::new("Day of week", 0, 6)
            .with_options(0, ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"])
            .with_special("SUN-SAT", "weekday names, e.g. MON-FRI")
            .with_special("?", "no specific value")
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field names & layouts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The fields a cron expression can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Second,
        FieldName::Minute,
        FieldName::Hour,
        FieldName::DayOfMonth,
        FieldName::Month,
        FieldName::DayOfWeek,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Second => "second",
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::DayOfMonth => "day_of_month",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "day_of_week",
        }
    }

    /// Built-in configuration for this field.
    pub fn preset(self) -> FieldConfig {
        match self {
            FieldName::Second => FieldConfig::second(),
            FieldName::Minute => FieldConfig::minute(),
            FieldName::Hour => FieldConfig::hour(),
            FieldName::DayOfMonth => FieldConfig::day_of_month(),
            FieldName::Month => FieldConfig::month(),
            FieldName::DayOfWeek => FieldConfig::day_of_week(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "second" | "sec" => Ok(FieldName::Second),
            "minute" | "min" => Ok(FieldName::Minute),
            "hour" => Ok(FieldName::Hour),
            "day_of_month" | "dom" => Ok(FieldName::DayOfMonth),
            "month" => Ok(FieldName::Month),
            "day_of_week" | "dow" | "weekday" => Ok(FieldName::DayOfWeek),
            _ => Err(crate::Error::Config(format!("unknown cron field '{s}'"))),
        }
    }
}

/// Shape of a complete cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CronLayout {
    /// `minute hour dom month dow`
    #[default]
    Standard,
    /// `second minute hour dom month dow`
    WithSeconds,
}

impl CronLayout {
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            CronLayout::Standard => &FieldName::ALL[1..],
            CronLayout::WithSeconds => &FieldName::ALL,
        }
    }

    pub fn len(self) -> usize {
        self.fields().len()
    }

    /// Layout for a given field count, if one exists.
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            5 => Some(CronLayout::Standard),
            6 => Some(CronLayout::WithSeconds),
            _ => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            CronLayout::Standard => "minute hour dom month dow",
            CronLayout::WithSeconds => "second minute hour dom month dow",
        }
    }
}
