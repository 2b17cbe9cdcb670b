//! The class arena.
//!
//! Classes live in a `Vec` and refer to each other by `ClassId`. The
//! subclass index is a lookup relation kept next to the arena (superclass to
//! direct subclasses); it never owns anything and only drives re-derivation
//! when a class changes.

use std::sync::Arc;

use orx_condition::{ConditionKind, RexxError, RexxResult};
use orx_core::value::fast_map_new;
use orx_core::{ClassId, FastHashMap, ObjectId};
use parking_lot::RwLock;
use smallvec::smallvec;

use super::info::ClassFlags;
use super::record::{ClassList, ClassRecord};

/// The registry behind the single hierarchy lock. Every mutating operation
/// runs under the write guard for its whole duration.
pub type SharedRegistry = Arc<RwLock<ClassRegistry>>;

#[derive(Debug)]
pub struct ClassRegistry {
    classes: Vec<ClassRecord>,
    subclasses: FastHashMap<ClassId, ClassList>,
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    pub const OBJECT: ClassId = ClassId(0);
    pub const CLASS: ClassId = ClassId(1);
    pub const STRING: ClassId = ClassId(2);
    pub const METHOD: ClassId = ClassId(3);

    /// Creates the bootstrap hierarchy: `Object` at the root, `Class` as the
    /// metaclass of every class (itself included), then `String` and
    /// `Method`.
    pub fn new() -> Self {
        let mut registry = Self {
            classes: Vec::with_capacity(64),
            subclasses: fast_map_new(),
        };
        let object = registry.allocate("Object", ClassFlags::PRIMITIVE_CLASS);
        let class = registry.allocate(
            "Class",
            ClassFlags::PRIMITIVE_CLASS | ClassFlags::META_CLASS,
        );
        let string = registry.allocate("String", ClassFlags::PRIMITIVE_CLASS);
        let method = registry.allocate("Method", ClassFlags::PRIMITIVE_CLASS);
        debug_assert_eq!(
            [object, class, string, method],
            [Self::OBJECT, Self::CLASS, Self::STRING, Self::METHOD]
        );

        registry.classes[object.index()].meta_classes = smallvec![class];
        for id in [class, string, method] {
            let record = &mut registry.classes[id.index()];
            record.class_supers = smallvec![object];
            record.instance_supers = smallvec![object];
            record.meta_classes = smallvec![class];
            registry.add_subclass(object, id);
        }
        registry.refresh();
        registry
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub(crate) fn allocate(&mut self, name: &str, flags: ClassFlags) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassRecord::new(id, name, flags));
        id
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassRecord> {
        self.classes.get(id.index())
    }

    pub fn record(&self, id: ClassId) -> RexxResult<&ClassRecord> {
        self.classes
            .get(id.index())
            .ok_or_else(|| RexxError::new(ConditionKind::UnknownClass(id.to_string())))
    }

    pub(crate) fn record_mut(&mut self, id: ClassId) -> RexxResult<&mut ClassRecord> {
        self.classes
            .get_mut(id.index())
            .ok_or_else(|| RexxError::new(ConditionKind::UnknownClass(id.to_string())))
    }

    /// Like `record_mut`, but refuses sealed classes.
    pub(crate) fn writable(&mut self, id: ClassId) -> RexxResult<&mut ClassRecord> {
        let record = self.record_mut(id)?;
        if record.is_sealed() {
            return Err(RexxError::new(ConditionKind::SealedClass(
                record.name().to_string(),
            )));
        }
        Ok(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.iter()
    }

    pub(crate) fn class_name(&self, id: ClassId) -> String {
        self.get(id)
            .map(|r| r.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    pub(crate) fn add_subclass(&mut self, parent: ClassId, child: ClassId) {
        let entry = self.subclasses.entry(parent).or_default();
        if !entry.contains(&child) {
            entry.push(child);
        }
    }

    pub(crate) fn remove_subclass(&mut self, parent: ClassId, child: ClassId) {
        if let Some(entry) = self.subclasses.get_mut(&parent) {
            entry.retain(|c| *c != child);
            if entry.is_empty() {
                self.subclasses.remove(&parent);
            }
        }
    }

    /// Direct subclasses registered under `id`, including classes that
    /// inherited `id` as a mixin.
    pub fn sub_classes(&self, id: ClassId) -> &[ClassId] {
        self.subclasses.get(&id).map(|s| s.as_slice()).unwrap_or(&[])
    }

    pub fn super_classes(&self, id: ClassId) -> RexxResult<Vec<ClassId>> {
        Ok(self.record(id)?.instance_supers.to_vec())
    }

    pub fn base_class(&self, id: ClassId) -> RexxResult<ClassId> {
        Ok(self.record(id)?.base_class)
    }

    /// The most specific metaclass.
    pub fn meta_class(&self, id: ClassId) -> RexxResult<ClassId> {
        Ok(self
            .record(id)?
            .meta_classes
            .first()
            .copied()
            .unwrap_or(Self::CLASS))
    }

    pub fn query_mixin_class(&self, id: ClassId) -> RexxResult<bool> {
        Ok(self.record(id)?.is_mixin())
    }

    /// True when `other` is `id` or one of its ancestors.
    pub fn is_subclass_of(&self, id: ClassId, other: ClassId) -> RexxResult<bool> {
        Ok(self.record(id)?.instance_behaviour.check_scope(other))
    }

    /// The class name given at creation.
    pub fn id(&self, id: ClassId) -> RexxResult<&str> {
        Ok(self.record(id)?.name())
    }

    pub fn default_name(&self, id: ClassId) -> RexxResult<String> {
        Ok(self.record(id)?.default_name())
    }

    /// Marks a class as built in; it can no longer be changed.
    pub fn seal(&mut self, id: ClassId) -> RexxResult<()> {
        self.record_mut(id)?.flags |= ClassFlags::REXX_DEFINED;
        Ok(())
    }

    pub(crate) fn set_object(&mut self, id: ClassId, object: ObjectId) -> RexxResult<()> {
        self.record_mut(id)?.object = object;
        Ok(())
    }

    pub fn class_object(&self, id: ClassId) -> RexxResult<ObjectId> {
        Ok(self.record(id)?.object)
    }
}
