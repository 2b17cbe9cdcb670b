use std::sync::Arc;

use orx_condition::RexxResult;
use orx_core::{ClassId, MethodName, ObjectId};

use super::Runtime;
use crate::class::Behaviour;
use crate::core::ObjectKind;
use crate::errors::no_method;
use crate::method::{Method, MethodBody};

impl Runtime {
    /// The behaviour a send to `receiver` resolves against. Class objects
    /// always see the live class side; other objects use their snapshot.
    pub fn behaviour_of(&self, receiver: ObjectId) -> RexxResult<Arc<Behaviour>> {
        let obj = self.object(receiver)?;
        match obj.kind {
            ObjectKind::Class(class) => Ok(self
                .registry
                .read()
                .record(class)?
                .class_behaviour()
                .clone()),
            _ => Ok(obj.behaviour.clone()),
        }
    }

    /// Sends `message` to `receiver`. An undefined or occluded name raises
    /// *no method*.
    pub fn send(
        &mut self,
        receiver: ObjectId,
        message: &str,
        args: &[ObjectId],
    ) -> RexxResult<ObjectId> {
        let name = MethodName::new(message);
        let behaviour = self.behaviour_of(receiver)?;
        let method = match behaviour.method(name.as_str()) {
            Some(method) => method.clone(),
            None => return Err(no_method(self.default_name(receiver)?, &name)),
        };
        tracing::trace!(receiver = receiver.0, message = %name, args = args.len(), "send");
        self.invoke(&method, receiver, args)
    }

    /// A send that starts looking above `start_scope` in the receiver's
    /// behaviour, the way `self~message:super` does.
    pub fn send_super(
        &mut self,
        receiver: ObjectId,
        message: &str,
        start_scope: ClassId,
        args: &[ObjectId],
    ) -> RexxResult<ObjectId> {
        let name = MethodName::new(message);
        let behaviour = self.behaviour_of(receiver)?;
        let method = match behaviour
            .super_lookup(name.as_str(), start_scope)
            .and_then(|slot| slot.method.clone())
        {
            Some(method) => method,
            None => return Err(no_method(self.default_name(receiver)?, &name)),
        };
        tracing::trace!(receiver = receiver.0, message = %name, scope = %start_scope, "send super");
        self.invoke(&method, receiver, args)
    }

    /// True when a send of `message` would find a method.
    pub fn responds_to(&self, receiver: ObjectId, message: &str) -> RexxResult<bool> {
        let name = MethodName::new(message);
        Ok(self.behaviour_of(receiver)?.method(name.as_str()).is_some())
    }

    fn invoke(
        &mut self,
        method: &Method,
        receiver: ObjectId,
        args: &[ObjectId],
    ) -> RexxResult<ObjectId> {
        match method.body() {
            MethodBody::Native(fun) => {
                let fun = *fun;
                let mark = self.gc_temp_roots.len();
                self.gc_temp_roots.push(receiver);
                self.gc_temp_roots.extend_from_slice(args);
                let result = fun(self, receiver, args);
                self.gc_temp_roots.truncate(mark);
                result
            }
            MethodBody::Constant(text) => {
                let text = text.clone();
                Ok(self.new_string(&text))
            }
        }
    }
}
