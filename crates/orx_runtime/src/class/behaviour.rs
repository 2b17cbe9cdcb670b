//! Flattened method lookup tables.

use std::sync::Arc;

use orx_core::value::ordered_map_new;
use orx_core::{ClassId, MethodName, OrderedMap};
use smallvec::SmallVec;

use crate::method::Method;

/// One definition of a method name, tagged with the class that introduced
/// it. `method == None` occludes every definition below it.
#[derive(Clone, Debug)]
pub struct MethodSlot {
    pub scope: ClassId,
    pub method: Option<Arc<Method>>,
}

/// The derived lookup table of a class (instance side) or of a class object
/// (class side).
///
/// Each name maps to a stack of definitions; the last entry wins. Scopes are
/// recorded in merge order, so the most specific class comes last.
#[derive(Clone, Debug)]
pub struct Behaviour {
    methods: OrderedMap<MethodName, SmallVec<[MethodSlot; 2]>>,
    scopes: SmallVec<[ClassId; 8]>,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour {
    pub fn new() -> Self {
        Self {
            methods: ordered_map_new(),
            scopes: SmallVec::new(),
        }
    }

    /// Pushes a definition on top of `name`'s stack. A previous definition
    /// from the same scope is replaced.
    pub fn add_method(&mut self, name: MethodName, slot: MethodSlot) {
        let stack = self.methods.entry(name).or_default();
        stack.retain(|s| s.scope != slot.scope);
        stack.push(slot);
    }

    /// Merges a class's own method dictionary with that class as the scope.
    pub fn merge_dictionary(
        &mut self,
        dictionary: &OrderedMap<MethodName, Option<Arc<Method>>>,
        scope: ClassId,
    ) {
        for (name, method) in dictionary {
            tracing::trace!(%name, %scope, "merge method");
            self.add_method(
                name.clone(),
                MethodSlot {
                    scope,
                    method: method.clone(),
                },
            );
        }
    }

    /// Merges another behaviour: every definition keeps its own scope, and
    /// the other behaviour's scopes are added.
    pub fn merge(&mut self, other: &Behaviour) {
        for (name, stack) in &other.methods {
            for slot in stack {
                self.add_method(name.clone(), slot.clone());
            }
        }
        for &scope in &other.scopes {
            self.add_scope(scope);
        }
    }

    pub fn add_scope(&mut self, scope: ClassId) {
        if !self.check_scope(scope) {
            self.scopes.push(scope);
        }
    }

    #[inline]
    pub fn check_scope(&self, scope: ClassId) -> bool {
        self.scopes.contains(&scope)
    }

    #[inline]
    pub fn scopes(&self) -> &[ClassId] {
        &self.scopes
    }

    /// The winning definition of `name`, including an occluding one.
    pub fn lookup(&self, name: &str) -> Option<&MethodSlot> {
        self.methods.get(name).and_then(|stack| stack.last())
    }

    /// The method that runs for `name`; occluded names have none.
    pub fn method(&self, name: &str) -> Option<&Arc<Method>> {
        self.lookup(name).and_then(|slot| slot.method.as_ref())
    }

    /// Lookup for a send that starts above `start_scope`: the first
    /// definition found walking the scopes recorded before it, most
    /// specific first.
    pub fn super_lookup(&self, name: &str, start_scope: ClassId) -> Option<&MethodSlot> {
        let stack = self.methods.get(name)?;
        let position = self.scopes.iter().position(|&s| s == start_scope)?;
        self.scopes[..position]
            .iter()
            .rev()
            .find_map(|&scope| stack.iter().find(|slot| slot.scope == scope))
    }

    /// Names with their winning definitions, in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&MethodName, &MethodSlot)> {
        self.methods
            .iter()
            .filter_map(|(name, stack)| stack.last().map(|slot| (name, slot)))
    }

    /// Every definition of every name, occluded ones included.
    pub fn slots(&self) -> impl Iterator<Item = (&MethodName, &MethodSlot)> {
        self.methods
            .iter()
            .flat_map(|(name, stack)| stack.iter().map(move |slot| (name, slot)))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
