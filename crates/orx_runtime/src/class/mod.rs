mod behaviour;
mod compose;
mod hierarchy;
mod info;
mod methods;
mod record;
mod registry;

pub use behaviour::{Behaviour, MethodSlot};
pub use info::ClassFlags;
pub use methods::MethodFilter;
pub use record::{ClassList, ClassRecord, MethodDictionary};
pub use registry::{ClassRegistry, SharedRegistry};
