//! Method definition and lookup on classes.

use std::sync::Arc;

use orx_condition::{ConditionKind, RexxError, RexxResult};
use orx_core::{ClassId, MethodName};

use super::behaviour::{Behaviour, MethodSlot};
use super::info::ClassFlags;
use super::record::MethodDictionary;
use super::registry::ClassRegistry;
use crate::method::Method;

const UNINIT: &str = "UNINIT";

/// Which instance methods `methods` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFilter {
    /// Everything the instance behaviour answers, in behaviour order.
    All,
    /// Only the class's own dictionary.
    Own,
    /// Only definitions introduced by the given class.
    Scope(ClassId),
}

impl ClassRegistry {
    /// Adds or replaces an instance method. `None` occludes any inherited
    /// method of that name.
    pub fn define_method(
        &mut self,
        class: ClassId,
        name: &str,
        method: Option<Arc<Method>>,
    ) -> RexxResult<()> {
        let record = self.writable(class)?;
        let name = MethodName::new(name);
        let uninit = name.as_str() == UNINIT;
        if uninit {
            record.flags |= ClassFlags::HAS_UNINIT;
        }
        tracing::debug!(class = %class, method = %name, occluding = method.is_none(), "define method");
        record.instance_methods.insert(name, method);
        if uninit {
            self.mark_parent_uninit(class);
        }
        self.update_instance_subclasses(class);
        Ok(())
    }

    /// Defines a batch of instance methods with a single re-derivation.
    pub fn define_methods<'a, I>(&mut self, class: ClassId, methods: I) -> RexxResult<()>
    where
        I: IntoIterator<Item = (&'a str, Option<Arc<Method>>)>,
    {
        let record = self.writable(class)?;
        let mut uninit = false;
        for (name, method) in methods {
            let name = MethodName::new(name);
            if name.as_str() == UNINIT {
                record.flags |= ClassFlags::HAS_UNINIT;
                uninit = true;
            }
            record.instance_methods.insert(name, method);
        }
        if uninit {
            self.mark_parent_uninit(class);
        }
        tracing::debug!(class = %class, "define methods");
        self.update_instance_subclasses(class);
        Ok(())
    }

    /// Removes an instance method from the class's own dictionary. Removing
    /// a name that is not defined is not an error.
    pub fn delete_method(&mut self, class: ClassId, name: &str) -> RexxResult<()> {
        let record = self.writable(class)?;
        let name = MethodName::new(name);
        record.instance_methods.shift_remove(name.as_str());
        tracing::debug!(class = %class, method = %name, "delete method");
        self.update_instance_subclasses(class);
        Ok(())
    }

    pub fn define_class_method(
        &mut self,
        class: ClassId,
        name: &str,
        method: Option<Arc<Method>>,
    ) -> RexxResult<()> {
        let record = self.writable(class)?;
        let name = MethodName::new(name);
        tracing::debug!(class = %class, method = %name, "define class method");
        record.class_methods.insert(name, method);
        self.update_subclasses(class);
        Ok(())
    }

    pub fn delete_class_method(&mut self, class: ClassId, name: &str) -> RexxResult<()> {
        let record = self.writable(class)?;
        let name = MethodName::new(name);
        record.class_methods.shift_remove(name.as_str());
        tracing::debug!(class = %class, method = %name, "delete class method");
        self.update_subclasses(class);
        Ok(())
    }

    /// Bootstrap installation: no sealing check and no re-derivation; the
    /// caller refreshes the hierarchy afterwards.
    pub(crate) fn install_method(
        &mut self,
        class: ClassId,
        name: MethodName,
        method: Arc<Method>,
        class_side: bool,
    ) -> RexxResult<()> {
        let record = self.record_mut(class)?;
        if class_side {
            record.class_methods.insert(name, Some(method));
        } else {
            record.instance_methods.insert(name, Some(method));
        }
        Ok(())
    }

    /// The instance method `name` resolves to. An occluded name yields
    /// `Ok(None)`; a name nobody defines is a *no method* condition.
    pub fn method(&self, class: ClassId, name: &str) -> RexxResult<Option<Arc<Method>>> {
        let record = self.record(class)?;
        let name = MethodName::new(name);
        match record.instance_behaviour.lookup(name.as_str()) {
            Some(slot) => Ok(slot.method.clone()),
            None => Err(RexxError::new(ConditionKind::NoMethod {
                receiver: record.default_name(),
                message: name.to_string(),
            })),
        }
    }

    /// The scope that supplies `name` to instances of `class`.
    pub fn method_scope(&self, class: ClassId, name: &str) -> RexxResult<Option<ClassId>> {
        let record = self.record(class)?;
        let name = MethodName::new(name);
        Ok(record
            .instance_behaviour
            .lookup(name.as_str())
            .map(|slot| slot.scope))
    }

    pub fn methods(
        &self,
        class: ClassId,
        filter: MethodFilter,
    ) -> RexxResult<Vec<(MethodName, MethodSlot)>> {
        let record = self.record(class)?;
        let found = match filter {
            MethodFilter::All => record
                .instance_behaviour
                .iter()
                .filter(|(_, slot)| slot.method.is_some())
                .map(|(name, slot)| (name.clone(), slot.clone()))
                .collect(),
            MethodFilter::Own => record
                .instance_methods
                .iter()
                .filter(|(_, method)| method.is_some())
                .map(|(name, method)| {
                    (
                        name.clone(),
                        MethodSlot {
                            scope: class,
                            method: method.clone(),
                        },
                    )
                })
                .collect(),
            MethodFilter::Scope(scope) => record
                .instance_behaviour
                .slots()
                .filter(|(_, slot)| slot.scope == scope && slot.method.is_some())
                .map(|(name, slot)| (name.clone(), slot.clone()))
                .collect(),
        };
        Ok(found)
    }

    /// Lookup for a send to `SUPER` from code running in `start_scope`.
    pub fn super_method(
        &self,
        class: ClassId,
        name: &str,
        start_scope: ClassId,
    ) -> RexxResult<Option<Arc<Method>>> {
        let record = self.record(class)?;
        let name = MethodName::new(name);
        Ok(record
            .instance_behaviour
            .super_lookup(name.as_str(), start_scope)
            .and_then(|slot| slot.method.clone()))
    }

    /// A private behaviour for one object: the class's instance behaviour
    /// plus `methods`, scoped to the class.
    pub fn enhanced(&self, class: ClassId, methods: &MethodDictionary) -> RexxResult<Behaviour> {
        let record = self.record(class)?;
        let mut behaviour = Behaviour::clone(&record.instance_behaviour);
        behaviour.merge_dictionary(methods, class);
        Ok(behaviour)
    }
}
