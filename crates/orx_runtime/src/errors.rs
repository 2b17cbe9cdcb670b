//! Conditions raised by the runtime itself.

use orx_condition::{ConditionKind, RexxError};
use orx_core::{MethodName, ObjectId};

pub(crate) fn no_method(receiver: String, message: &MethodName) -> RexxError {
    RexxError::new(ConditionKind::NoMethod {
        receiver,
        message: message.to_string(),
    })
}

pub(crate) fn dead_object(id: ObjectId) -> RexxError {
    RexxError::new(ConditionKind::InvalidObject {
        expected: "live object",
        actual: format!("object {}", id.0),
    })
}
