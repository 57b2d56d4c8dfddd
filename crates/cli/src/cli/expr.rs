use anyhow::Context;
use chrono::{DateTime, Utc};
use mc_cron::describe::describe;
use mc_cron::{classify, encode, validate_expression, validate_field, CronExpression, Schedule};
use mc_domain::config::{Config, PREVIEW_COUNT_RANGE};
use mc_domain::{CronLayout, FieldName};

/// One line per field: label, text, mode, summary and bounds check.
pub fn explain(config: &Config, expr: &str) -> anyhow::Result<String> {
    let expr = CronExpression::detect(expr)?;
    let mut lines = Vec::with_capacity(expr.fields().len());
    for (name, value) in expr.named_fields() {
        let cfg = config.field(name);
        let mode = classify(value.as_str(), &cfg);
        let status = match validate_field(&mode, &cfg) {
            Ok(()) => "ok".to_owned(),
            Err(e) => format!("invalid: {e}"),
        };
        lines.push(format!(
            "{:<13} {:<12} {:<9} {} [{status}]",
            cfg.label,
            value.as_str(),
            mode.kind().as_str(),
            describe(&mode, &cfg),
        ));
    }
    Ok(lines.join("\n"))
}

/// Validate every field; the error names the first offending field.
pub fn validate(config: &Config, expr: &str) -> anyhow::Result<String> {
    let parsed = CronExpression::detect(expr)?;
    validate_expression(&parsed, &config.fields_for(parsed.layout()))?;
    Ok(format!("OK: {parsed}"))
}

/// Build an expression in the configured layout (or the seconds layout),
/// starting from all `*` and replacing each field named in `assignments`
/// (`FIELD=VALUE`) with its canonical text.
pub fn build(config: &Config, assignments: &[String], seconds: bool) -> anyhow::Result<String> {
    let layout = if seconds {
        CronLayout::WithSeconds
    } else {
        config.schedule.layout
    };
    let mut expr = CronExpression::every(layout);
    for assignment in assignments {
        let (name, value) = assignment
            .split_once('=')
            .with_context(|| format!("expected FIELD=VALUE, got '{assignment}'"))?;
        let name: FieldName = name.trim().parse()?;
        let value = value.trim();
        if value.is_empty() || value.contains(char::is_whitespace) {
            anyhow::bail!("{name}: value must be a single token, got '{value}'");
        }
        let index = layout
            .fields()
            .iter()
            .position(|&n| n == name)
            .with_context(|| format!("{name} is not a field of '{}'", layout.describe()))?;
        let cfg = config.field(name);
        let canonical = encode(&classify(value, &cfg), &cfg);
        expr = expr
            .with_field(index, canonical)
            .with_context(|| format!("{name} has no slot in '{}'", layout.describe()))?;
    }
    validate_expression(&expr, &config.fields_for(layout))?;
    Ok(expr.to_string())
}

/// Upcoming fire times, one RFC 3339 UTC instant per line followed by the
/// local time in the chosen timezone.
pub fn next(
    config: &Config,
    expr: &str,
    count: Option<usize>,
    tz: Option<&str>,
    after: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let tz_name = tz.unwrap_or(config.schedule.timezone.as_str());
    let tz: chrono_tz::Tz = tz_name
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone '{tz_name}'"))?;
    let count = match count {
        Some(n) if !PREVIEW_COUNT_RANGE.contains(&n) => {
            anyhow::bail!("--count must be within {PREVIEW_COUNT_RANGE:?}, got {n}")
        }
        Some(n) => n,
        None => config.schedule.clamped().preview_count,
    };
    let after = match after {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("parsing --after '{raw}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let schedule = Schedule::parse(expr, config)?;
    let times = schedule.upcoming(&after, count, tz);
    tracing::debug!(expr = %schedule.expression(), found = times.len(), "preview computed");

    Ok(times
        .into_iter()
        .map(|t| {
            format!(
                "{}  ({})",
                t.to_rfc3339(),
                t.with_timezone(&tz).format("%a %Y-%m-%d %H:%M:%S %Z")
            )
        })
        .collect())
}
