use serde::{Deserialize, Serialize};

use crate::field::CronLayout;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Schedule defaults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Allowed number of fire times in one preview.
pub const PREVIEW_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=100;

/// Defaults applied when an expression is edited or previewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Field layout assumed for new expressions.
    #[serde(default)]
    pub layout: CronLayout,
    /// IANA timezone the backend evaluates schedules in.
    #[serde(default = "d_timezone")]
    pub timezone: String,
    /// Number of upcoming fire times shown by a preview.
    /// Clamped to the range `1..=100`.
    #[serde(default = "d_preview_count")]
    pub preview_count: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            layout: CronLayout::default(),
            timezone: d_timezone(),
            preview_count: d_preview_count(),
        }
    }
}

impl ScheduleConfig {
    /// Clamp `preview_count` to [`PREVIEW_COUNT_RANGE`].
    pub fn clamped(&self) -> Self {
        Self {
            preview_count: self
                .preview_count
                .clamp(*PREVIEW_COUNT_RANGE.start(), *PREVIEW_COUNT_RANGE.end()),
            ..self.clone()
        }
    }
}

fn d_timezone() -> String {
    "UTC".into()
}

fn d_preview_count() -> usize {
    5
}
