//! Class composition and message dispatch.
//!
//! - `class` - the class arena, behaviour derivation, mixins and metaclasses
//! - `core` - the object heap
//! - `runtime` - `Runtime`, message sends and collection
//! - `methods` - native methods installed on `Object`, `Class` and `String`

pub mod class;
pub mod core;
mod errors;
pub mod method;
mod methods;
pub mod natives_registry;
mod runtime;

pub use class::{
    Behaviour, ClassFlags, ClassList, ClassRecord, ClassRegistry, MethodDictionary, MethodFilter,
    MethodSlot, SharedRegistry,
};
pub use crate::core::{GcStats, Heap, HeapObject, ObjectKind};
pub use method::{Method, MethodBody, NativeFn};
pub use natives_registry::{NativeProvider, NativeRegistry, StdNativeProvider};
pub use orx_condition::{RexxError, RexxResult};
pub use orx_core::{ClassId, MethodName, ObjectId};
pub use runtime::{Runtime, RuntimeConfig};
