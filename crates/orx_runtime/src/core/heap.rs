//! Object arena and mark/sweep collection.

use std::sync::Arc;

use orx_core::{ClassId, ObjectId};
use orx_number::NumberString;

use crate::class::Behaviour;
use crate::method::Method;

#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// An instance with no native payload.
    Plain,
    /// The object that stands for a class.
    Class(ClassId),
    Str(Box<[u8]>),
    Number(Arc<NumberString>),
    Method(Arc<Method>),
}

/// A heap object.
///
/// Ordinary objects keep the behaviour their class had when they were
/// allocated; later class changes do not reach them. Class objects resolve
/// through the registry instead and always see the current class side.
#[derive(Clone, Debug)]
pub struct HeapObject {
    pub class: ClassId,
    pub behaviour: Arc<Behaviour>,
    pub kind: ObjectKind,
}

impl HeapObject {
    pub fn size(&self) -> usize {
        let base = std::mem::size_of::<HeapObject>();
        let deep = match &self.kind {
            ObjectKind::Str(bytes) => bytes.len(),
            ObjectKind::Number(n) => n.len() + 32,
            ObjectKind::Plain | ObjectKind::Class(_) | ObjectKind::Method(_) => 0,
        };
        base + deep
    }
}

/// Counts from one collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GcStats {
    pub marked: usize,
    pub swept: usize,
}

pub struct Heap {
    pub(crate) objects: Vec<Option<HeapObject>>,
    free_list: Vec<usize>,
    marks: Vec<u64>,
    pub(crate) alloc_count: usize,
    pub(crate) gc_threshold: usize,
}

impl Heap {
    /// Creates a heap whose first slot holds `nil`.
    pub fn new(nil: HeapObject, gc_threshold: usize) -> Self {
        let mut objects = Vec::with_capacity(1024);
        objects.push(Some(nil));
        Self {
            objects,
            free_list: Vec::new(),
            marks: Vec::new(),
            alloc_count: 0,
            gc_threshold: gc_threshold.max(1),
        }
    }

    pub fn alloc(&mut self, obj: HeapObject) -> ObjectId {
        self.alloc_count += 1;
        if let Some(id) = self.free_list.pop() {
            self.objects[id] = Some(obj);
            ObjectId(id)
        } else {
            let id = self.objects.len();
            self.objects.push(Some(obj));
            ObjectId(id)
        }
    }

    #[inline]
    pub fn should_gc(&self) -> bool {
        self.alloc_count >= self.gc_threshold
    }

    pub fn get(&self, id: ObjectId) -> Option<&HeapObject> {
        self.objects.get(id.0).and_then(|o| o.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut HeapObject> {
        self.objects.get_mut(id.0).and_then(|o| o.as_mut())
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live objects, `nil` included.
    pub fn live_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_marked(&self, id: ObjectId) -> bool {
        let word = id.0 >> 6;
        let bit = id.0 & 63;
        self.marks.get(word).is_some_and(|w| (w & (1 << bit)) != 0)
    }

    fn set_mark(&mut self, id: ObjectId) -> bool {
        let word = id.0 >> 6;
        let bit = id.0 & 63;
        if word >= self.marks.len() {
            self.marks.resize(word + 1, 0);
        }
        let w = &mut self.marks[word];
        let mask = 1 << bit;
        if (*w & mask) != 0 {
            return false;
        }
        *w |= mask;
        true
    }

    /// Marks `nil` and every root. Objects carry no references to other
    /// objects, so marking does not traverse.
    pub(crate) fn mark_all(&mut self, roots: &[ObjectId]) -> usize {
        self.marks.clear();
        let mut marked = 0;
        for &id in std::iter::once(&ObjectId::NIL).chain(roots) {
            if self.contains(id) && self.set_mark(id) {
                marked += 1;
            }
        }
        marked
    }

    /// Frees every unmarked object and resets the allocation counter.
    pub(crate) fn sweep(&mut self) -> usize {
        let mut swept = 0;
        let mut live_count = 0;
        self.free_list.clear();
        for i in 0..self.objects.len() {
            if self.objects[i].is_none() {
                self.free_list.push(i);
            } else if !self.is_marked(ObjectId(i)) {
                self.objects[i] = None;
                self.free_list.push(i);
                swept += 1;
            } else {
                live_count += 1;
            }
        }

        while self.objects.last().is_some_and(|o| o.is_none()) {
            self.objects.pop();
        }
        let new_len = self.objects.len();
        self.free_list.retain(|&i| i < new_len);

        self.marks.clear();
        self.alloc_count = 0;
        self.gc_threshold = self.gc_threshold.max(live_count);
        swept
    }

    pub fn memory_bytes(&self) -> usize {
        self.objects.iter().flatten().map(HeapObject::size).sum()
    }
}
