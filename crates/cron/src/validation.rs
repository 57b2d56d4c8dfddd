//! Bounds and shape checks for classified fields and whole expressions.

use mc_domain::{Error, FieldConfig, Result};

use crate::classify::classify;
use crate::expression::CronExpression;
use crate::matcher::{raw_parts, RawPart};
use crate::mode::CronFieldMode;

/// Check one classified field against its bounds. Raw text is read the
/// same way the preview reads it, so `1-99/2` fails on a minute field just
/// like the structured range `1-99`.
pub fn validate_field(mode: &CronFieldMode, config: &FieldConfig) -> Result<()> {
    match mode {
        CronFieldMode::Any => Ok(()),
        CronFieldMode::Specific { value } => check_value(*value, "value", config),
        CronFieldMode::Range { start, end } => check_range(*start, *end, config),
        CronFieldMode::Interval { start, step } => {
            check_value(*start, "interval start", config)?;
            check_step(*step, config)
        }
        CronFieldMode::List { values } => {
            if values.is_empty() {
                return Err(Error::invalid_field(&config.label, "list is empty"));
            }
            values
                .iter()
                .try_for_each(|&v| check_value(v, "value", config))
        }
        CronFieldMode::Raw { raw } => {
            let parts = raw_parts(raw, config).ok_or_else(|| {
                Error::invalid_field(&config.label, format!("unrecognised value '{raw}'"))
            })?;
            parts.iter().try_for_each(|part| check_raw_part(part, config))
        }
    }
}

fn check_raw_part(part: &RawPart, config: &FieldConfig) -> Result<()> {
    if part.ranged {
        check_range(part.lo, part.hi, config)?;
    } else {
        check_value(part.lo, "value", config)?;
    }
    check_step(part.step, config)
}

fn check_value(n: u32, what: &str, config: &FieldConfig) -> Result<()> {
    if config.contains(n) {
        return Ok(());
    }
    Err(Error::invalid_field(
        &config.label,
        format!("{what} {n} out of range {}..={}", config.min, config.max),
    ))
}

fn check_range(start: u32, end: u32, config: &FieldConfig) -> Result<()> {
    if !config.contains(start) || !config.contains(end) {
        return Err(Error::invalid_field(
            &config.label,
            format!(
                "range {start}-{end} out of bounds {}..={}",
                config.min, config.max
            ),
        ));
    }
    if start > end {
        return Err(Error::invalid_field(
            &config.label,
            format!("range start {start} > end {end}"),
        ));
    }
    Ok(())
}

fn check_step(step: u32, config: &FieldConfig) -> Result<()> {
    let top = config.max.max(1);
    if step == 0 || step > top {
        return Err(Error::invalid_field(
            &config.label,
            format!("step {step} out of range 1..={top}"),
        ));
    }
    Ok(())
}

/// Classify and check every field of `expr`. `configs` pairs with the
/// expression's fields by position. Stops at the first failure.
pub fn validate_expression(expr: &CronExpression, configs: &[FieldConfig]) -> Result<()> {
    if configs.len() != expr.fields().len() {
        return Err(Error::Config(format!(
            "{} field configs supplied for {} fields",
            configs.len(),
            expr.fields().len()
        )));
    }
    for (value, config) in expr.fields().iter().zip(configs) {
        validate_field(&classify(value.as_str(), config), config)?;
    }
    Ok(())
}
