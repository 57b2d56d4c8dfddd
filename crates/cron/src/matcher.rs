//! Field matching: does a calendar value satisfy a classified field?
//!
//! Structured modes are evaluated directly. Raw fields get a second,
//! more permissive reading (comma lists of ranges and steps, `JAN`/`MON`
//! style names, `?`) since that is where scheduler syntax the editor does
//! not structure ends up.

use mc_domain::FieldConfig;

use crate::classify::parse_int;
use crate::mode::CronFieldMode;

impl CronFieldMode {
    /// Whether `n` satisfies this field. `None` means the field is Raw and
    /// its text could not be interpreted.
    pub fn matches(&self, n: u32, config: &FieldConfig) -> Option<bool> {
        Some(match self {
            CronFieldMode::Any => true,
            CronFieldMode::Specific { value } => n == *value,
            CronFieldMode::Range { start, end } => n >= *start && n <= *end,
            CronFieldMode::Interval { start, step } => {
                *step > 0 && n >= *start && n <= config.max && (n - start) % step == 0
            }
            CronFieldMode::List { values } => values.contains(&n),
            CronFieldMode::Raw { raw } => return raw_matches(raw, n, config),
        })
    }

    /// Whether the field narrows the day search. Text that starts with `*`
    /// (including `*/step`) or is `?` does not, matching Vixie cron's
    /// day-of-month/day-of-week rule.
    pub fn is_restricted(&self, config: &FieldConfig) -> bool {
        match self {
            CronFieldMode::Any => false,
            CronFieldMode::Interval { start, .. } => *start != config.min,
            CronFieldMode::Raw { raw } => !(raw == "?" || raw.starts_with('*')),
            _ => true,
        }
    }
}

/// One comma-separated part of a Raw field with names resolved: the values
/// `lo..=hi` stepping by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawPart {
    pub lo: u32,
    pub hi: u32,
    pub step: u32,
    /// Written as `a-b` rather than `*`, `?` or a single value.
    pub ranged: bool,
}

/// Read a Raw field into its parts. `None` when any part is unreadable.
pub(crate) fn raw_parts(raw: &str, config: &FieldConfig) -> Option<Vec<RawPart>> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            let (base, step) = match part.split_once('/') {
                Some((base, step)) => (base, Some(parse_int(step).filter(|&s| s > 0)?)),
                None => (part, None),
            };
            let (lo, hi, ranged) = match base {
                "*" | "?" => (config.min, config.max, false),
                _ => match base.split_once('-') {
                    Some((a, b)) => (resolve(a, config)?, resolve(b, config)?, true),
                    None => {
                        let a = resolve(base, config)?;
                        // `a/s` runs from a to the top of the field.
                        let hi = if step.is_some() { config.max } else { a };
                        (a, hi, false)
                    }
                },
            };
            Some(RawPart {
                lo,
                hi,
                step: step.unwrap_or(1),
                ranged,
            })
        })
        .collect()
}

fn raw_matches(raw: &str, n: u32, config: &FieldConfig) -> Option<bool> {
    let parts = raw_parts(raw, config)?;
    Some(
        parts
            .iter()
            .any(|p| n >= p.lo && n <= p.hi && (n - p.lo) % p.step == 0),
    )
}

fn resolve(token: &str, config: &FieldConfig) -> Option<u32> {
    parse_int(token).or_else(|| config.option_value(token))
}

/// A field compiled to the sorted set of values it accepts within
/// `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatcher {
    allowed: Vec<u32>,
    restricted: bool,
}

impl FieldMatcher {
    /// `None` when the field is Raw and cannot be interpreted.
    pub fn compile(mode: &CronFieldMode, config: &FieldConfig) -> Option<Self> {
        let mut allowed = Vec::new();
        for n in config.min..=config.max {
            if mode.matches(n, config)? {
                allowed.push(n);
            }
        }
        Some(Self {
            allowed,
            restricted: mode.is_restricted(config),
        })
    }

    pub fn contains(&self, n: u32) -> bool {
        self.allowed.binary_search(&n).is_ok()
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.allowed
    }
}
