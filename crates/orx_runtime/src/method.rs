//! Method objects.

use std::fmt;
use std::sync::Arc;

use orx_condition::RexxResult;
use orx_core::{MethodName, ObjectId};

use crate::Runtime;

/// Native method entry point: `(runtime, receiver, arguments) -> result`.
pub type NativeFn = fn(&mut Runtime, ObjectId, &[ObjectId]) -> RexxResult<ObjectId>;

#[derive(Clone)]
pub enum MethodBody {
    Native(NativeFn),
    /// Answers a fixed string.
    Constant(Arc<str>),
}

/// An immutable method. The scope it runs in is recorded by the dictionary
/// or behaviour slot that holds it, so one method can be shared by several
/// classes.
pub struct Method {
    name: MethodName,
    body: MethodBody,
}

impl Method {
    pub fn native(name: impl Into<MethodName>, fun: NativeFn) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            body: MethodBody::Native(fun),
        })
    }

    pub fn constant(name: impl Into<MethodName>, text: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            body: MethodBody::Constant(Arc::from(text)),
        })
    }

    #[inline]
    pub fn name(&self) -> &MethodName {
        &self.name
    }

    #[inline]
    pub fn body(&self) -> &MethodBody {
        &self.body
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, MethodBody::Native(_))
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            MethodBody::Native(_) => write!(f, "Method({} <native>)", self.name),
            MethodBody::Constant(text) => write!(f, "Method({} {:?})", self.name, text),
        }
    }
}
