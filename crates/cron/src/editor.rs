//! Editing state for one cron field.
//!
//! The editor holds the structured mode behind a field and re-encodes it on
//! every edit. The encoded text is handed to the owner through an
//! `on_change` callback; the owner stays the source of truth and may push a
//! new value back in with [`FieldEditor::set_value`].

use std::fmt;

use mc_domain::FieldConfig;

use crate::classify::classify;
use crate::encode::encode;
use crate::mode::{CronFieldMode, CronFieldValue, ModeKind};

/// Callback receiving each newly encoded field value.
pub type OnChange = Box<dyn FnMut(&CronFieldValue)>;

pub struct FieldEditor {
    config: FieldConfig,
    mode: CronFieldMode,
    value: CronFieldValue,
    on_change: Option<OnChange>,
}

impl fmt::Debug for FieldEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEditor")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl FieldEditor {
    /// Seed the editor by classifying `initial`.
    pub fn new(config: FieldConfig, initial: impl Into<CronFieldValue>) -> Self {
        let value = initial.into();
        let mode = classify(value.as_str(), &config);
        Self {
            config,
            mode,
            value,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(&CronFieldValue) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn mode(&self) -> &CronFieldMode {
        &self.mode
    }

    pub fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn value(&self) -> &CronFieldValue {
        &self.value
    }

    /// Replace the value from outside (e.g. loading a stored schedule).
    ///
    /// Re-runs the classifier. The callback is not invoked, the owner
    /// already knows the value.
    pub fn set_value(&mut self, value: impl Into<CronFieldValue>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.mode = classify(value.as_str(), &self.config);
        tracing::debug!(field = %self.config.label, %value, mode = %self.mode.kind(), "field value replaced");
        self.value = value;
    }

    /// Switch to another mode with parameters seeded from the field bounds.
    /// Selecting the current mode keeps its parameters.
    pub fn select_mode(&mut self, kind: ModeKind) {
        if kind == self.mode.kind() {
            return;
        }
        tracing::debug!(field = %self.config.label, from = %self.mode.kind(), to = %kind, "mode switched");
        self.mode = kind.seed(&self.config, &self.value);
        self.commit();
    }

    // ── Parameter edits ──────────────────────────────────────────────
    //
    // Each returns `false` when the edit does not apply to the current mode.

    pub fn set_specific(&mut self, n: u32) -> bool {
        let n = self.config.clamp(n);
        match &mut self.mode {
            CronFieldMode::Specific { value } => *value = n,
            _ => return false,
        }
        self.commit();
        true
    }

    pub fn set_range_start(&mut self, n: u32) -> bool {
        let n = self.config.clamp(n);
        match &mut self.mode {
            CronFieldMode::Range { start, .. } => *start = n,
            _ => return false,
        }
        self.commit();
        true
    }

    pub fn set_range_end(&mut self, n: u32) -> bool {
        let n = self.config.clamp(n);
        match &mut self.mode {
            CronFieldMode::Range { end, .. } => *end = n,
            _ => return false,
        }
        self.commit();
        true
    }

    pub fn set_interval_start(&mut self, n: u32) -> bool {
        let n = self.config.clamp(n);
        match &mut self.mode {
            CronFieldMode::Interval { start, .. } => *start = n,
            _ => return false,
        }
        self.commit();
        true
    }

    pub fn set_interval_step(&mut self, n: u32) -> bool {
        let n = n.clamp(1, self.config.max.max(1));
        match &mut self.mode {
            CronFieldMode::Interval { step, .. } => *step = n,
            _ => return false,
        }
        self.commit();
        true
    }

    /// Replace the list. Values are clamped and de-duplicated, keeping the
    /// first occurrence. An empty list is rejected.
    pub fn set_list(&mut self, values: &[u32]) -> bool {
        let mut cleaned: Vec<u32> = Vec::with_capacity(values.len());
        for &v in values {
            let v = self.config.clamp(v);
            if !cleaned.contains(&v) {
                cleaned.push(v);
            }
        }
        if cleaned.is_empty() {
            return false;
        }
        match &mut self.mode {
            CronFieldMode::List { values } => *values = cleaned,
            _ => return false,
        }
        self.commit();
        true
    }

    /// Add `n` to the list, or remove it if present. The last remaining
    /// value cannot be removed.
    pub fn toggle_list_value(&mut self, n: u32) -> bool {
        let n = self.config.clamp(n);
        match &mut self.mode {
            CronFieldMode::List { values } => match values.iter().position(|&v| v == n) {
                Some(_) if values.len() == 1 => return false,
                Some(i) => {
                    values.remove(i);
                }
                None => values.push(n),
            },
            _ => return false,
        }
        self.commit();
        true
    }

    pub fn set_raw(&mut self, text: impl Into<String>) -> bool {
        match &mut self.mode {
            CronFieldMode::Raw { raw } => *raw = text.into(),
            _ => return false,
        }
        self.commit();
        true
    }

    fn commit(&mut self) {
        self.value = encode(&self.mode, &self.config);
        if let Some(cb) = self.on_change.as_mut() {
            cb(&self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(config: FieldConfig, initial: &str) -> (FieldEditor, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let editor = FieldEditor::new(config, initial)
            .with_on_change(move |v| sink.borrow_mut().push(v.to_string()));
        (editor, seen)
    }

    #[test]
    fn new_classifies_initial_value() {
        let editor = FieldEditor::new(FieldConfig::minute(), "*/15");
        assert_eq!(editor.mode(), &CronFieldMode::Interval { start: 0, step: 15 });
        assert_eq!(editor.value().as_str(), "*/15");
    }

    #[test]
    fn new_keeps_unnormalized_text_until_edited() {
        let editor = FieldEditor::new(FieldConfig::minute(), "0/15");
        assert_eq!(editor.value().as_str(), "0/15");
    }

    #[test]
    fn select_mode_seeds_from_bounds_and_emits() {
        let (mut editor, seen) = recording(FieldConfig::hour(), "*");
        editor.select_mode(ModeKind::Range);
        assert_eq!(editor.mode(), &CronFieldMode::Range { start: 0, end: 23 });
        editor.select_mode(ModeKind::List);
        assert_eq!(editor.mode(), &CronFieldMode::List { values: vec![0] });
        assert_eq!(*seen.borrow(), vec!["0-23", "0"]);
    }

    #[test]
    fn select_same_mode_is_noop() {
        let (mut editor, seen) = recording(FieldConfig::minute(), "10-20");
        editor.select_mode(ModeKind::Range);
        assert_eq!(editor.mode(), &CronFieldMode::Range { start: 10, end: 20 });
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn switching_does_not_carry_parameters() {
        let mut editor = FieldEditor::new(FieldConfig::minute(), "5,10,15");
        editor.select_mode(ModeKind::Range);
        assert_eq!(editor.mode(), &CronFieldMode::Range { start: 0, end: 59 });
    }

    #[test]
    fn parameter_edits_reencode() {
        let (mut editor, seen) = recording(FieldConfig::minute(), "*/5");
        assert!(editor.set_interval_step(10));
        assert!(editor.set_interval_start(3));
        assert!(editor.set_interval_start(0));
        assert_eq!(*seen.borrow(), vec!["*/10", "3/10", "*/10"]);
    }

    #[test]
    fn edits_for_other_modes_are_ignored() {
        let (mut editor, seen) = recording(FieldConfig::minute(), "7");
        assert!(!editor.set_range_start(3));
        assert!(!editor.set_interval_step(2));
        assert!(!editor.toggle_list_value(3));
        assert!(!editor.set_raw("x"));
        assert!(editor.set_specific(8));
        assert_eq!(*seen.borrow(), vec!["8"]);
    }

    #[test]
    fn numeric_edits_are_clamped() {
        let mut editor = FieldEditor::new(FieldConfig::day_of_month(), "5");
        editor.set_specific(0);
        assert_eq!(editor.value().as_str(), "1");
        editor.set_specific(99);
        assert_eq!(editor.value().as_str(), "31");

        editor.select_mode(ModeKind::Interval);
        editor.set_interval_step(0);
        assert_eq!(editor.mode(), &CronFieldMode::Interval { start: 1, step: 1 });
    }

    #[test]
    fn list_toggle_and_dedupe() {
        let mut editor = FieldEditor::new(FieldConfig::day_of_week(), "1,3");
        assert!(editor.toggle_list_value(5));
        assert_eq!(editor.value().as_str(), "1,3,5");
        assert!(editor.toggle_list_value(1));
        assert_eq!(editor.value().as_str(), "3,5");
        assert!(editor.set_list(&[6, 2, 6, 9]));
        assert_eq!(editor.value().as_str(), "6,2");
        assert!(!editor.set_list(&[]));
    }

    #[test]
    fn last_list_value_cannot_be_removed() {
        let mut editor = FieldEditor::new(FieldConfig::minute(), "1,2");
        assert!(editor.toggle_list_value(1));
        assert!(!editor.toggle_list_value(2));
        assert_eq!(editor.mode(), &CronFieldMode::List { values: vec![2] });
        assert_eq!(editor.value().as_str(), "2");
    }

    #[test]
    fn raw_mode_starts_from_current_text() {
        let (mut editor, seen) = recording(FieldConfig::day_of_week(), "1-5");
        editor.select_mode(ModeKind::Raw);
        assert_eq!(editor.mode(), &CronFieldMode::Raw { raw: "1-5".into() });
        editor.set_raw("MON-FRI");
        assert_eq!(*seen.borrow(), vec!["1-5", "MON-FRI"]);
    }

    #[test]
    fn set_value_reclassifies_without_emitting() {
        let (mut editor, seen) = recording(FieldConfig::minute(), "*");
        editor.set_value("1,2,3");
        assert_eq!(editor.kind(), ModeKind::List);
        editor.set_value("MON");
        assert_eq!(editor.kind(), ModeKind::Raw);
        assert!(seen.borrow().is_empty());
    }
}
