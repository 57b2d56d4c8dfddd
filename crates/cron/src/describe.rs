//! Short human-readable summaries of a classified field.

use mc_domain::FieldConfig;

use crate::mode::CronFieldMode;

/// One-line summary, e.g. `every 5 minute(s) from 0` or `day of week MON-FRI`.
pub fn describe(mode: &CronFieldMode, config: &FieldConfig) -> String {
    let label = config.label.to_lowercase();
    let show = |n: u32| match config.option_label(n) {
        Some(name) => name.to_owned(),
        None => n.to_string(),
    };
    match mode {
        CronFieldMode::Any => format!("every {label}"),
        CronFieldMode::Specific { value } => format!("{label} {}", show(*value)),
        CronFieldMode::Range { start, end } => {
            format!("{label} {} through {}", show(*start), show(*end))
        }
        CronFieldMode::Interval { start, step } => {
            format!("every {step} {label}(s) from {}", show(*start))
        }
        CronFieldMode::List { values } => {
            let shown: Vec<String> = values.iter().map(|&v| show(v)).collect();
            format!("{label} in {}", shown.join(", "))
        }
        CronFieldMode::Raw { raw } => {
            match config.special_values.iter().find(|s| s.value == *raw) {
                Some(special) => format!("{label} {raw} ({})", special.description),
                None => format!("{label} {raw} (custom)"),
            }
        }
    }
}
