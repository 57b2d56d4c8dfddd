//! Field value encoder: [`CronFieldMode`] -> canonical field text.

use mc_domain::FieldConfig;

use crate::mode::{CronFieldMode, CronFieldValue};

/// Render a mode as cron field text. Performs no bounds checking.
pub fn encode(mode: &CronFieldMode, config: &FieldConfig) -> CronFieldValue {
    let text = match mode {
        CronFieldMode::Any => "*".to_owned(),
        CronFieldMode::Specific { value } => value.to_string(),
        CronFieldMode::Range { start, end } => format!("{start}-{end}"),
        CronFieldMode::Interval { start, step } if *start == config.min => format!("*/{step}"),
        CronFieldMode::Interval { start, step } => format!("{start}/{step}"),
        CronFieldMode::List { values } => values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(","),
        CronFieldMode::Raw { raw } => raw.clone(),
    };
    CronFieldValue::new(text)
}
