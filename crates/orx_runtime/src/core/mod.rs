pub mod heap;

pub use heap::{GcStats, Heap, HeapObject, ObjectKind};
