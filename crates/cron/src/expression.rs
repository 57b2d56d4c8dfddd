//! Whole-expression layer: splitting, joining and editing the five or six
//! fields of a cron expression together.

use std::fmt;

use mc_domain::{CronLayout, Error, FieldConfig, FieldName, Result};

use crate::editor::FieldEditor;
use crate::mode::CronFieldValue;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Expression
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A complete cron expression, one value per field of its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    layout: CronLayout,
    fields: Vec<CronFieldValue>,
}

impl CronExpression {
    /// Split `expr` on whitespace, expecting exactly `layout.len()` fields.
    pub fn parse(expr: &str, layout: CronLayout) -> Result<Self> {
        let fields: Vec<CronFieldValue> = expr.split_whitespace().map(CronFieldValue::from).collect();
        Self::from_fields(layout, fields)
    }

    /// Split `expr` and pick the layout from its field count (5 or 6).
    pub fn detect(expr: &str) -> Result<Self> {
        let fields: Vec<CronFieldValue> = expr.split_whitespace().map(CronFieldValue::from).collect();
        let layout = CronLayout::for_count(fields.len()).ok_or_else(|| Error::FieldCount {
            layout: "5 or 6 fields".into(),
            expected: CronLayout::Standard.len(),
            found: fields.len(),
        })?;
        Ok(Self { layout, fields })
    }

    pub fn from_fields(layout: CronLayout, fields: Vec<CronFieldValue>) -> Result<Self> {
        if fields.len() != layout.len() {
            return Err(Error::FieldCount {
                layout: layout.describe().into(),
                expected: layout.len(),
                found: fields.len(),
            });
        }
        Ok(Self { layout, fields })
    }

    /// An all-`*` expression.
    pub fn every(layout: CronLayout) -> Self {
        Self {
            layout,
            fields: vec![CronFieldValue::from("*"); layout.len()],
        }
    }

    pub fn layout(&self) -> CronLayout {
        self.layout
    }

    pub fn fields(&self) -> &[CronFieldValue] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&CronFieldValue> {
        let idx = self.layout.fields().iter().position(|&n| n == name)?;
        self.fields.get(idx)
    }

    /// Field names paired with their values, in layout order.
    pub fn named_fields(&self) -> impl Iterator<Item = (FieldName, &CronFieldValue)> {
        self.layout.fields().iter().copied().zip(self.fields.iter())
    }

    /// A copy with the field at `index` replaced.
    pub fn with_field(&self, index: usize, value: CronFieldValue) -> Option<Self> {
        if index >= self.fields.len() {
            return None;
        }
        let mut fields = self.fields.clone();
        fields[index] = value;
        Some(Self {
            layout: self.layout,
            fields,
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field.as_str())?;
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Expression editor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Callback receiving each newly assembled expression.
pub type OnExpressionChange = Box<dyn FnMut(&CronExpression)>;

/// One [`FieldEditor`] per field; any field edit re-emits the whole
/// expression.
pub struct ExpressionEditor {
    layout: CronLayout,
    editors: Vec<FieldEditor>,
    on_change: Option<OnExpressionChange>,
}

impl fmt::Debug for ExpressionEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionEditor")
            .field("layout", &self.layout)
            .field("editors", &self.editors)
            .finish_non_exhaustive()
    }
}

impl ExpressionEditor {
    /// `configs` must hold one entry per field of the expression's layout.
    pub fn new(expr: &CronExpression, configs: Vec<FieldConfig>) -> Result<Self> {
        if configs.len() != expr.layout().len() {
            return Err(Error::Config(format!(
                "{} field configs supplied for a {}-field layout",
                configs.len(),
                expr.layout().len()
            )));
        }
        let editors = configs
            .into_iter()
            .zip(expr.fields())
            .map(|(config, value)| FieldEditor::new(config, value.clone()))
            .collect();
        Ok(Self {
            layout: expr.layout(),
            editors,
            on_change: None,
        })
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(&CronExpression) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn layout(&self) -> CronLayout {
        self.layout
    }

    pub fn fields(&self) -> &[FieldEditor] {
        &self.editors
    }

    pub fn field(&self, index: usize) -> Option<&FieldEditor> {
        self.editors.get(index)
    }

    /// Current expression assembled from every field editor.
    pub fn expression(&self) -> CronExpression {
        CronExpression {
            layout: self.layout,
            fields: self.editors.iter().map(|e| e.value().clone()).collect(),
        }
    }

    /// Run `edit` against one field editor. Emits the new expression when
    /// the field's value changed. Returns `None` for an unknown index.
    pub fn edit<R>(&mut self, index: usize, edit: impl FnOnce(&mut FieldEditor) -> R) -> Option<R> {
        let editor = self.editors.get_mut(index)?;
        let before = editor.value().clone();
        let out = edit(editor);
        if *editor.value() != before {
            let expr = self.expression();
            if let Some(cb) = self.on_change.as_mut() {
                cb(&expr);
            }
        }
        Some(out)
    }

    /// Replace every field from outside. The layout must match.
    pub fn set_expression(&mut self, expr: &CronExpression) -> Result<()> {
        if expr.layout() != self.layout {
            return Err(Error::FieldCount {
                layout: self.layout.describe().into(),
                expected: self.layout.len(),
                found: expr.fields().len(),
            });
        }
        for (editor, value) in self.editors.iter_mut().zip(expr.fields()) {
            editor.set_value(value.clone());
        }
        Ok(())
    }
}
