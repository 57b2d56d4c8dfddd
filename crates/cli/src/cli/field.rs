use anyhow::Context;
use mc_cron::describe::describe;
use mc_cron::{classify, encode, CronFieldMode};
use mc_domain::config::Config;
use mc_domain::FieldName;

/// Classify `value` as a `field` value and render the result.
pub fn classify_value(config: &Config, field: FieldName, value: &str, json: bool) -> anyhow::Result<String> {
    let cfg = config.field(field);
    let mode = classify(value, &cfg);
    if json {
        return Ok(serde_json::to_string(&mode)?);
    }
    let canonical = encode(&mode, &cfg);
    Ok(format!(
        "{}: {} ({})\ncanonical: {canonical}",
        cfg.label,
        mode.kind(),
        describe(&mode, &cfg),
    ))
}

/// Parse a JSON mode and render it as `field` text.
pub fn encode_mode(config: &Config, field: FieldName, mode_json: &str) -> anyhow::Result<String> {
    let mode: CronFieldMode = serde_json::from_str(mode_json)
        .with_context(|| format!("parsing mode JSON '{mode_json}'"))?;
    Ok(encode(&mode, &config.field(field)).into_string())
}
