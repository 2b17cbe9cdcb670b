//! Garbage collection infrastructure - base types.

use std::fmt;

/// Handle to a heap-allocated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// The `.nil` object always lives in the first heap slot.
    pub const NIL: ObjectId = ObjectId(0);

    #[inline]
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }
}

/// Handle to a class record in the class arena.
///
/// Handles are never reused, so a stale handle can only point at a class
/// that still exists (classes are not removed from the arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
