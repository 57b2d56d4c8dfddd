//! Cron field codec.
//!
//! Converts a single cron field (`*/5`, `1-3`, `2,4,6`, ...) to and from a
//! structured [`CronFieldMode`], and builds the editing, validation and
//! preview layers a schedule form needs on top of that.

pub mod classify;
pub mod describe;
pub mod editor;
pub mod encode;
pub mod expression;
pub mod matcher;
pub mod mode;
pub mod schedule;
pub mod validation;

pub use classify::classify;
pub use editor::FieldEditor;
pub use encode::encode;
pub use expression::{CronExpression, ExpressionEditor};
pub use mode::{CronFieldMode, CronFieldValue, ModeKind};
pub use schedule::{parse_tz, Schedule};
pub use validation::{validate_expression, validate_field};
