use std::sync::Arc;

use orx_core::value::ordered_map_new;
use orx_core::{ClassId, MethodName, ObjectId, OrderedMap};
use smallvec::SmallVec;

use super::behaviour::Behaviour;
use super::info::ClassFlags;
use crate::method::Method;

/// A class's own method table; `None` entries occlude inherited methods.
pub type MethodDictionary = OrderedMap<MethodName, Option<Arc<Method>>>;

pub type ClassList = SmallVec<[ClassId; 4]>;

/// A node in the class arena.
#[derive(Debug)]
pub struct ClassRecord {
    pub(crate) id: ClassId,
    pub(crate) name: Arc<str>,
    pub(crate) flags: ClassFlags,
    pub(crate) class_methods: MethodDictionary,
    pub(crate) instance_methods: MethodDictionary,
    pub(crate) class_supers: ClassList,
    pub(crate) instance_supers: ClassList,
    pub(crate) class_behaviour: Arc<Behaviour>,
    pub(crate) instance_behaviour: Arc<Behaviour>,
    /// The non-mixin class this one descends from; itself for ordinary
    /// classes.
    pub(crate) base_class: ClassId,
    /// Most specific first.
    pub(crate) meta_classes: ClassList,
    /// The heap object that stands for this class, once allocated.
    pub(crate) object: ObjectId,
}

impl ClassRecord {
    pub(crate) fn new(id: ClassId, name: &str, flags: ClassFlags) -> Self {
        Self {
            id,
            name: Arc::from(name),
            flags,
            class_methods: ordered_map_new(),
            instance_methods: ordered_map_new(),
            class_supers: ClassList::new(),
            instance_supers: ClassList::new(),
            class_behaviour: Arc::new(Behaviour::new()),
            instance_behaviour: Arc::new(Behaviour::new()),
            base_class: id,
            meta_classes: ClassList::new(),
            object: ObjectId::NIL,
        }
    }

    #[inline]
    pub fn id(&self) -> ClassId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn flags(&self) -> ClassFlags {
        self.flags
    }

    pub fn class_methods(&self) -> &MethodDictionary {
        &self.class_methods
    }

    pub fn instance_methods(&self) -> &MethodDictionary {
        &self.instance_methods
    }

    pub fn class_supers(&self) -> &[ClassId] {
        &self.class_supers
    }

    pub fn instance_supers(&self) -> &[ClassId] {
        &self.instance_supers
    }

    /// Shared snapshot of the class-side behaviour.
    pub fn class_behaviour(&self) -> &Arc<Behaviour> {
        &self.class_behaviour
    }

    /// Shared snapshot of the instance-side behaviour.
    pub fn instance_behaviour(&self) -> &Arc<Behaviour> {
        &self.instance_behaviour
    }

    pub fn base_class(&self) -> ClassId {
        self.base_class
    }

    pub fn meta_classes(&self) -> &[ClassId] {
        &self.meta_classes
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn is_mixin(&self) -> bool {
        self.flags.contains(ClassFlags::MIXIN)
    }

    pub fn is_meta_class(&self) -> bool {
        self.flags.contains(ClassFlags::META_CLASS)
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(ClassFlags::REXX_DEFINED)
    }

    /// `"The Account class"`.
    pub fn default_name(&self) -> String {
        format!("The {} class", self.name)
    }

    /// `"an Account"` / `"a Point"`.
    pub fn instance_default_name(&self) -> String {
        let article = match self.name.chars().next() {
            Some(c) if "AEIOUaeiou".contains(c) => "an",
            _ => "a",
        };
        format!("{} {}", article, self.name)
    }
}
