//! Behaviour derivation.
//!
//! Precedence rule: a class's behaviour is built by walking its superclass
//! list from last to first, recursing into every superclass not yet merged,
//! and finally merging the class's own methods. Later merges win, so the
//! class itself beats its first superclass, which beats later ones; a class
//! reachable along several paths is merged once, at its first visit.

use std::sync::Arc;

use orx_core::ClassId;

use super::behaviour::Behaviour;
use super::registry::ClassRegistry;

impl ClassRegistry {
    pub fn create_instance_behaviour(&self, id: ClassId, target: &mut Behaviour) {
        let Some(record) = self.get(id) else {
            return;
        };
        for &superclass in record.instance_supers.iter().rev() {
            if !target.check_scope(superclass) {
                self.create_instance_behaviour(superclass, target);
            }
        }
        if !target.check_scope(id) {
            target.merge_dictionary(&record.instance_methods, id);
            target.add_scope(id);
        }
    }

    /// Class side: superclasses as on the instance side, then the instance
    /// behaviour of each metaclass not yet in scope (least specific first),
    /// then the class's own class methods.
    pub fn create_class_behaviour(&self, id: ClassId, target: &mut Behaviour) {
        let Some(record) = self.get(id) else {
            return;
        };
        for &superclass in record.class_supers.iter().rev() {
            if !target.check_scope(superclass) {
                self.create_class_behaviour(superclass, target);
            }
        }
        if !target.check_scope(id) {
            for &meta in record.meta_classes.iter().rev() {
                if target.check_scope(meta) {
                    continue;
                }
                if let Some(meta_record) = self.get(meta) {
                    target.merge(&meta_record.instance_behaviour);
                }
            }
            target.merge_dictionary(&record.class_methods, id);
            target.add_scope(id);
        }
    }

    pub(crate) fn rebuild_instance(&mut self, id: ClassId) {
        let mut target = Behaviour::new();
        self.create_instance_behaviour(id, &mut target);
        if let Ok(record) = self.record_mut(id) {
            record.instance_behaviour = Arc::new(target);
        }
    }

    pub(crate) fn rebuild_class(&mut self, id: ClassId) {
        let mut target = Behaviour::new();
        self.create_class_behaviour(id, &mut target);
        if let Ok(record) = self.record_mut(id) {
            record.class_behaviour = Arc::new(target);
        }
    }

    /// Re-derives both behaviours of `id` and of every class below it.
    pub fn update_subclasses(&mut self, id: ClassId) {
        self.rebuild_class(id);
        self.rebuild_instance(id);
        let subclasses = self.sub_classes(id).to_vec();
        tracing::debug!(class = %id, fan_out = subclasses.len(), "update subclasses");
        for subclass in subclasses {
            self.update_subclasses(subclass);
        }
    }

    /// Re-derives only the instance side of `id` and the classes below it.
    pub fn update_instance_subclasses(&mut self, id: ClassId) {
        self.rebuild_instance(id);
        let subclasses = self.sub_classes(id).to_vec();
        tracing::debug!(class = %id, fan_out = subclasses.len(), "update instance subclasses");
        for subclass in subclasses {
            self.update_instance_subclasses(subclass);
        }
    }

    /// Re-derives the whole hierarchy. Class behaviours merge the
    /// metaclass's instance behaviour, so `Class` goes first.
    pub fn refresh(&mut self) {
        self.rebuild_instance(Self::CLASS);
        self.update_subclasses(Self::OBJECT);
    }
}
