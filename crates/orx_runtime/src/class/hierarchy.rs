//! Structural changes: new classes, mixin grafting and removal.
//!
//! Every check runs before the first mutation, so a failed call leaves the
//! hierarchy exactly as it was.

use orx_condition::{ConditionKind, RexxError, RexxResult};
use orx_core::ClassId;
use smallvec::smallvec;

use super::info::ClassFlags;
use super::record::MethodDictionary;
use super::registry::ClassRegistry;

impl ClassRegistry {
    /// Creates a subclass of `receiver`. `meta_class` defaults to the
    /// receiver's metaclass; `enhancing` adds class methods to the new class.
    pub fn subclass(
        &mut self,
        receiver: ClassId,
        name: &str,
        meta_class: Option<ClassId>,
        enhancing: Option<&MethodDictionary>,
    ) -> RexxResult<ClassId> {
        self.new_subclass(receiver, name, meta_class, enhancing, false)
    }

    /// Creates a mixin below `receiver`; the mixin shares the receiver's
    /// base class.
    pub fn mixinclass(
        &mut self,
        receiver: ClassId,
        name: &str,
        meta_class: Option<ClassId>,
        enhancing: Option<&MethodDictionary>,
    ) -> RexxResult<ClassId> {
        self.new_subclass(receiver, name, meta_class, enhancing, true)
    }

    fn new_subclass(
        &mut self,
        receiver: ClassId,
        name: &str,
        meta_class: Option<ClassId>,
        enhancing: Option<&MethodDictionary>,
        mixin: bool,
    ) -> RexxResult<ClassId> {
        if name.is_empty() {
            return Err(RexxError::new(ConditionKind::InvalidClassName));
        }
        let parent = self.record(receiver)?;
        let parent_flags = parent.flags;
        let parent_base = parent.base_class;
        let mut meta_classes = parent.meta_classes.clone();
        let meta = match meta_class {
            Some(meta) => meta,
            None => meta_classes.first().copied().unwrap_or(Self::CLASS),
        };
        let meta_record = self.record(meta)?;
        if !meta_record.is_meta_class() {
            return Err(RexxError::new(ConditionKind::BadMetaclass(
                meta_record.name().to_string(),
            )));
        }
        if meta_classes.first() != Some(&meta) {
            meta_classes.retain(|m| *m != meta);
            meta_classes.insert(0, meta);
        }

        let mut flags = ClassFlags::empty();
        if parent_flags.contains(ClassFlags::META_CLASS) {
            flags |= ClassFlags::META_CLASS;
        }
        if mixin {
            flags |= ClassFlags::MIXIN;
        }
        if parent_flags.uninit_defined() {
            flags |= ClassFlags::PARENT_HAS_UNINIT;
        }

        let id = self.allocate(name, flags);
        let record = self.record_mut(id)?;
        record.class_supers = smallvec![receiver];
        record.instance_supers = smallvec![receiver];
        record.meta_classes = meta_classes;
        if mixin {
            record.base_class = parent_base;
        }
        if let Some(methods) = enhancing {
            for (name, method) in methods {
                record.class_methods.insert(name.clone(), method.clone());
            }
        }

        self.rebuild_class(id);
        self.rebuild_instance(id);
        self.add_subclass(receiver, id);
        tracing::debug!(
            class = %id,
            name,
            superclass = %receiver,
            meta = %meta,
            mixin,
            "class created"
        );
        Ok(id)
    }

    /// Grafts `mixin` into the superclass lists of `receiver`, at the end or
    /// just after `position`.
    pub fn inherit(
        &mut self,
        receiver: ClassId,
        mixin: ClassId,
        position: Option<ClassId>,
    ) -> RexxResult<()> {
        let target = self.record(receiver)?;
        if target.is_sealed() {
            return Err(RexxError::new(ConditionKind::SealedClass(
                target.name().to_string(),
            )));
        }
        let mixin_record = self.record(mixin)?;
        if !mixin_record.is_mixin() {
            return Err(RexxError::new(ConditionKind::MixinClassRequired(
                mixin_record.name().to_string(),
            )));
        }
        if receiver == mixin
            || target.class_behaviour.check_scope(mixin)
            || mixin_record.class_behaviour.check_scope(receiver)
        {
            return Err(RexxError::new(ConditionKind::RecursiveInherit {
                receiver: target.name().to_string(),
                mixin: mixin_record.name().to_string(),
            }));
        }
        let base = mixin_record.base_class;
        if !target.class_behaviour.check_scope(base)
            || !target.instance_behaviour.check_scope(base)
        {
            return Err(RexxError::new(ConditionKind::BaseClassIncompatible {
                receiver: target.name().to_string(),
                mixin: mixin_record.name().to_string(),
                base: self.class_name(base),
            }));
        }
        let insert_at = match position {
            None => None,
            Some(position) => {
                let class_index = target.class_supers.iter().position(|&c| c == position);
                let instance_index = target.instance_supers.iter().position(|&c| c == position);
                match (class_index, instance_index) {
                    (Some(c), Some(i)) => Some((c + 1, i + 1)),
                    _ => {
                        return Err(RexxError::new(ConditionKind::Uninherit {
                            receiver: target.name().to_string(),
                            class: self.class_name(position),
                        }));
                    }
                }
            }
        };
        let mixin_uninit = mixin_record.flags.uninit_defined();

        let record = self.record_mut(receiver)?;
        match insert_at {
            None => {
                record.class_supers.push(mixin);
                record.instance_supers.push(mixin);
            }
            Some((class_index, instance_index)) => {
                record.class_supers.insert(class_index, mixin);
                record.instance_supers.insert(instance_index, mixin);
            }
        }
        if mixin_uninit {
            record.flags |= ClassFlags::HAS_UNINIT;
        }
        self.add_subclass(mixin, receiver);
        if mixin_uninit {
            self.mark_parent_uninit(receiver);
        }
        tracing::debug!(class = %receiver, mixin = %mixin, "inherit");
        self.update_subclasses(receiver);
        Ok(())
    }

    /// Flags every class below `id` as having an ancestor with `UNINIT`.
    pub(crate) fn mark_parent_uninit(&mut self, id: ClassId) {
        let subclasses = self.sub_classes(id).to_vec();
        for subclass in subclasses {
            if let Ok(record) = self.record_mut(subclass) {
                record.flags |= ClassFlags::PARENT_HAS_UNINIT;
            }
            self.mark_parent_uninit(subclass);
        }
    }

    /// Removes a mixin added with `inherit`. The first superclass can never
    /// be removed.
    pub fn uninherit(&mut self, receiver: ClassId, mixin: ClassId) -> RexxResult<()> {
        let target = self.record(receiver)?;
        if target.is_sealed() {
            return Err(RexxError::new(ConditionKind::SealedClass(
                target.name().to_string(),
            )));
        }
        let class_index = target.class_supers.iter().position(|&c| c == mixin);
        let instance_index = target.instance_supers.iter().position(|&c| c == mixin);
        let (class_index, instance_index) = match (class_index, instance_index) {
            (Some(c), Some(i)) if c > 0 && i > 0 => (c, i),
            _ => {
                return Err(RexxError::new(ConditionKind::Uninherit {
                    receiver: target.name().to_string(),
                    class: self.class_name(mixin),
                }));
            }
        };

        let record = self.record_mut(receiver)?;
        record.class_supers.remove(class_index);
        record.instance_supers.remove(instance_index);
        self.remove_subclass(mixin, receiver);
        tracing::debug!(class = %receiver, mixin = %mixin, "uninherit");
        self.update_subclasses(receiver);
        Ok(())
    }
}
