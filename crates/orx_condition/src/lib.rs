//!
//! Error conditions raised by the object runtime core.
//!
mod condition;
mod kind;

pub use condition::{Category, RexxError, RexxResult, codes};
pub use kind::{ConditionFormatter, ConditionKind};
