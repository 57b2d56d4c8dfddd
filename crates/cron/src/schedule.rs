//! Timezone-aware schedule preview: which instants does an expression fire
//! at? Used to show upcoming runs next to the editor; nothing is executed.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use mc_domain::config::Config;
use mc_domain::{CronLayout, Error, FieldConfig, Result};

use crate::classify::classify;
use crate::expression::CronExpression;
use crate::matcher::FieldMatcher;

/// How far ahead a search may look before giving up.
const HORIZON_DAYS: i64 = 366;

/// Parse a timezone string into a `chrono_tz::Tz`, falling back to UTC.
pub fn parse_tz(tz: &str) -> Tz {
    tz.parse::<Tz>().unwrap_or(chrono_tz::UTC)
}

/// A cron expression compiled for evaluation.
#[derive(Debug, Clone)]
pub struct Schedule {
    expr: CronExpression,
    second: Option<FieldMatcher>,
    minute: FieldMatcher,
    hour: FieldMatcher,
    day_of_month: FieldMatcher,
    month: FieldMatcher,
    day_of_week: FieldMatcher,
}

impl Schedule {
    /// Compile `expr`; `configs` pairs with its fields by position.
    ///
    /// Fails with [`Error::Unsupported`] when a Raw field cannot be
    /// interpreted (e.g. `L`).
    pub fn new(expr: &CronExpression, configs: &[FieldConfig]) -> Result<Self> {
        if configs.len() != expr.fields().len() {
            return Err(Error::Config(format!(
                "{} field configs supplied for {} fields",
                configs.len(),
                expr.fields().len()
            )));
        }

        let mut compiled = Vec::with_capacity(configs.len());
        for (value, config) in expr.fields().iter().zip(configs) {
            let mode = classify(value.as_str(), config);
            let matcher = FieldMatcher::compile(&mode, config).ok_or_else(|| {
                Error::Unsupported(format!("{}: cannot evaluate '{value}'", config.label))
            })?;
            compiled.push(matcher);
        }

        let mut fields = compiled.into_iter();
        let second = match expr.layout() {
            CronLayout::WithSeconds => fields.next(),
            CronLayout::Standard => None,
        };
        let mut next = || {
            fields
                .next()
                .ok_or_else(|| Error::Config("expression is missing a field".into()))
        };
        Ok(Self {
            minute: next()?,
            hour: next()?,
            day_of_month: next()?,
            month: next()?,
            day_of_week: next()?,
            second,
            expr: expr.clone(),
        })
    }

    /// Detect the layout of `expr` and compile it with the field settings
    /// from `config`.
    pub fn parse(expr: &str, config: &Config) -> Result<Self> {
        let expr = CronExpression::detect(expr)?;
        Self::new(&expr, &config.fields_for(expr.layout()))
    }

    pub fn expression(&self) -> &CronExpression {
        &self.expr
    }

    /// Whether a **local** datetime matches. Seconds are ignored for
    /// 5-field expressions.
    pub fn matches(&self, dt: &NaiveDateTime) -> bool {
        let second_ok = match &self.second {
            Some(sec) => sec.contains(dt.second()),
            None => true,
        };
        second_ok && self.minute_matches(dt)
    }

    /// Check if a UTC datetime matches (UTC shorthand).
    pub fn matches_utc(&self, dt: &DateTime<Utc>) -> bool {
        self.matches(&dt.naive_utc())
    }

    fn minute_matches(&self, dt: &NaiveDateTime) -> bool {
        self.minute.contains(dt.minute())
            && self.hour.contains(dt.hour())
            && self.day_matches(&dt.date())
    }

    /// Vixie cron rule: when both day fields are restricted, either one
    /// matching is enough. A field starting with `*` (`*/2` included) is
    /// not restricted, so it narrows together with the other one.
    fn day_matches(&self, date: &NaiveDate) -> bool {
        if !self.month.contains(date.month()) {
            return false;
        }
        let dom = self.day_of_month.contains(date.day());
        let weekday = date.weekday().num_days_from_sunday();
        let dow = self.day_of_week.contains(weekday)
            || (weekday == 0 && self.day_of_week.contains(7));
        if self.day_of_month.is_restricted() && self.day_of_week.is_restricted() {
            dom || dow
        } else {
            dom && dow
        }
    }

    /// First matching second within a minute at or after `from`.
    fn second_in_minute(&self, from: u32) -> Option<u32> {
        match &self.second {
            Some(sec) => sec.values().iter().copied().find(|&s| s >= from),
            None => (from == 0).then_some(0),
        }
    }

    /// Compute the next occurrence strictly after `after`, evaluated in
    /// the given timezone. Returns a UTC `DateTime`.
    ///
    /// **DST handling:**
    /// - Spring-forward gaps: local times that don't exist are skipped.
    /// - Fall-back overlaps: the earliest mapping still after `after` is
    ///   chosen.
    pub fn next_after(&self, after: &DateTime<Utc>, tz: Tz) -> Option<DateTime<Utc>> {
        let local_after = after.with_timezone(&tz).naive_local();
        let truncated = local_after.with_nanosecond(0).unwrap_or(local_after);
        let first = truncated + Duration::seconds(1);
        let horizon = first + Duration::days(HORIZON_DAYS);

        let mut minute = first.with_second(0).unwrap_or(first);
        while minute <= horizon {
            if !self.day_matches(&minute.date()) {
                minute = start_of_next_day(&minute)?;
                continue;
            }
            if !self.hour.contains(minute.hour()) {
                minute = start_of_next_hour(&minute)?;
                continue;
            }
            if self.minute.contains(minute.minute()) {
                let from = if minute < first { first.second() } else { 0 };
                if let Some(sec) = self.second_in_minute(from) {
                    let candidate = minute.with_second(sec).unwrap_or(minute);
                    if let Some(hit) = resolve_local(&tz, &candidate, after) {
                        return Some(hit);
                    }
                }
            }
            minute += Duration::minutes(1);
        }

        tracing::warn!(expr = %self.expr, "no occurrence within {HORIZON_DAYS} days");
        None
    }

    /// Compute up to `n` next occurrences, timezone-aware. Stops early when
    /// the horizon runs out.
    pub fn upcoming(&self, after: &DateTime<Utc>, n: usize, tz: Tz) -> Vec<DateTime<Utc>> {
        let mut results = Vec::new();
        let mut cursor = *after;
        for _ in 0..n {
            match self.next_after(&cursor, tz) {
                Some(next) => {
                    results.push(next);
                    cursor = next;
                }
                None => break,
            }
        }
        results
    }
}

/// Map a local candidate back to UTC. `None` for a DST gap, or when every
/// mapping is not after `after`.
fn resolve_local(tz: &Tz, candidate: &NaiveDateTime, after: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(candidate) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)).filter(|dt| dt > after),
        LocalResult::Ambiguous(earliest, latest) => [earliest, latest]
            .into_iter()
            .map(|dt| dt.with_timezone(&Utc))
            .find(|dt| dt > after),
        LocalResult::None => None,
    }
}

fn start_of_next_day(dt: &NaiveDateTime) -> Option<NaiveDateTime> {
    dt.date().succ_opt()?.and_hms_opt(0, 0, 0)
}

fn start_of_next_hour(dt: &NaiveDateTime) -> Option<NaiveDateTime> {
    let top = dt.date().and_hms_opt(dt.hour(), 0, 0)?;
    Some(top + Duration::hours(1))
}
