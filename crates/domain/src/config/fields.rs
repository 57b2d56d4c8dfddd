use serde::{Deserialize, Serialize};

use crate::field::{FieldConfig, FieldOption, SpecialValue};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Per-field overrides
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Partial [`FieldConfig`] layered on top of a preset. Unset keys keep
/// the preset's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_values: Option<Vec<SpecialValue>>,
}

impl FieldOverride {
    pub fn apply(&self, mut base: FieldConfig) -> FieldConfig {
        if let Some(label) = &self.label {
            base.label = label.clone();
        }
        if let Some(min) = self.min {
            base.min = min;
        }
        if let Some(max) = self.max {
            base.max = max;
        }
        if let Some(options) = &self.options {
            base.options = options.clone();
        }
        if let Some(special) = &self.special_values {
            base.special_values = special.clone();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_is_identity() {
        let base = FieldConfig::month();
        assert_eq!(FieldOverride::default().apply(base.clone()), base);
    }

    #[test]
    fn override_keeps_unset_keys() {
        let ov = FieldOverride {
            label: Some("Weekday".into()),
            max: Some(7),
            ..Default::default()
        };
        let cfg = ov.apply(FieldConfig::day_of_week());
        assert_eq!(cfg.label, "Weekday");
        assert_eq!(cfg.min, 0);
        assert_eq!(cfg.max, 7);
        assert_eq!(cfg.options.len(), 7);
    }
}
