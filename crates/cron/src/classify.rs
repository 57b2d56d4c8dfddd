//! Field mode classifier: raw field text -> [`CronFieldMode`].

use mc_domain::FieldConfig;

use crate::mode::CronFieldMode;

/// Classify a single cron field.
///
/// Total over all inputs: anything that does not parse cleanly for the
/// mode its delimiters suggest becomes [`CronFieldMode::Raw`] with the
/// original text. Delimiters are checked in a fixed order (`/`, then `-`,
/// then `,`), so `1-5/2` is treated as an interval and lands in Raw.
pub fn classify(value: &str, config: &FieldConfig) -> CronFieldMode {
    match structured(value, config) {
        Some(mode) => mode,
        None => {
            tracing::debug!(field = %config.label, value, "field kept as raw");
            CronFieldMode::Raw {
                raw: value.to_owned(),
            }
        }
    }
}

fn structured(value: &str, config: &FieldConfig) -> Option<CronFieldMode> {
    if value == "*" {
        return Some(CronFieldMode::Any);
    }

    if let Some((start_s, step_s)) = value.split_once('/') {
        let start = if start_s == "*" {
            config.min
        } else {
            parse_int(start_s)?
        };
        let step = parse_int(step_s)?;
        if step == 0 {
            return None;
        }
        return Some(CronFieldMode::Interval { start, step });
    }

    if let Some((start_s, end_s)) = value.split_once('-') {
        let start = parse_int(start_s)?;
        let end = parse_int(end_s)?;
        return Some(CronFieldMode::Range { start, end });
    }

    if value.contains(',') {
        let values = value
            .split(',')
            .map(|token| parse_int(token.trim()))
            .collect::<Option<Vec<_>>>()?;
        return Some(CronFieldMode::List { values });
    }

    parse_int(value).map(|value| CronFieldMode::Specific { value })
}

/// Strict unsigned parse: ASCII digits only, no sign, no whitespace.
pub(crate) fn parse_int(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute() -> FieldConfig {
        FieldConfig::minute()
    }

    #[test]
    fn star_is_any() {
        assert_eq!(classify("*", &minute()), CronFieldMode::Any);
    }

    #[test]
    fn star_step_resolves_to_min() {
        assert_eq!(
            classify("*/5", &minute()),
            CronFieldMode::Interval { start: 0, step: 5 }
        );
        assert_eq!(
            classify("*/2", &FieldConfig::day_of_month()),
            CronFieldMode::Interval { start: 1, step: 2 }
        );
    }

    #[test]
    fn explicit_interval_start() {
        assert_eq!(
            classify("10/15", &minute()),
            CronFieldMode::Interval { start: 10, step: 15 }
        );
    }

    #[test]
    fn range() {
        assert_eq!(
            classify("10-20", &minute()),
            CronFieldMode::Range { start: 10, end: 20 }
        );
    }

    #[test]
    fn list_keeps_order_and_trims() {
        assert_eq!(
            classify("5, 1 ,3", &minute()),
            CronFieldMode::List {
                values: vec![5, 1, 3]
            }
        );
    }

    #[test]
    fn specific() {
        assert_eq!(classify("7", &minute()), CronFieldMode::Specific { value: 7 });
    }

    #[test]
    fn names_fall_back_to_raw() {
        assert_eq!(
            classify("MON-FRI", &FieldConfig::day_of_week()),
            CronFieldMode::Raw {
                raw: "MON-FRI".into()
            }
        );
    }

    #[test]
    fn negative_looking_value_is_raw() {
        assert_eq!(
            classify("-5", &minute()),
            CronFieldMode::Raw { raw: "-5".into() }
        );
    }

    #[test]
    fn zero_step_is_raw() {
        assert_eq!(
            classify("*/0", &minute()),
            CronFieldMode::Raw { raw: "*/0".into() }
        );
    }

    #[test]
    fn mixed_syntax_is_raw() {
        for input in ["1-5/2", "1-3,7", "1,,3", "1/2/3", "5-", "*/x"] {
            assert_eq!(
                classify(input, &minute()),
                CronFieldMode::Raw { raw: input.into() },
                "{input}"
            );
        }
    }

    #[test]
    fn degenerate_inputs_are_raw() {
        for input in ["", " ", " 5", "5 ", "+5", "99999999999", "L", "?"] {
            assert_eq!(
                classify(input, &minute()),
                CronFieldMode::Raw { raw: input.into() },
                "{input:?}"
            );
        }
    }

    #[test]
    fn out_of_range_numbers_still_classify() {
        // Bounds are enforced by the editor and validator, not here.
        assert_eq!(
            classify("75", &minute()),
            CronFieldMode::Specific { value: 75 }
        );
    }

    #[test]
    fn parse_int_is_strict() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("007"), Some(7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-1"), None);
        assert_eq!(parse_int("4 2"), None);
    }
}
