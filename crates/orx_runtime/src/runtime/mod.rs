//! The runtime: class registry, object heap and the ambient numeric
//! settings, tied together by message sends.

mod config;
mod gc;
mod send;

use std::sync::Arc;

use orx_condition::{ConditionKind, RexxError, RexxResult};
use orx_core::{ClassId, ObjectId};
use orx_number::{NumberString, NumericSettings};

pub use config::RuntimeConfig;

use crate::class::{ClassRegistry, MethodDictionary, SharedRegistry};
use crate::core::{Heap, HeapObject, ObjectKind};
use crate::errors::dead_object;
use crate::method::Method;
use crate::natives_registry::{NativeProvider, NativeRegistry, StdNativeProvider};

pub struct Runtime {
    pub(crate) registry: SharedRegistry,
    pub(crate) heap: Heap,
    pub(crate) config: RuntimeConfig,
    pub(crate) numeric: NumericSettings,
    /// Objects a native method must keep alive across a collection.
    pub(crate) gc_temp_roots: Vec<ObjectId>,
}

impl Runtime {
    pub fn new() -> RexxResult<Self> {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> RexxResult<Self> {
        config.numeric.validate()?;

        let mut registry = ClassRegistry::new();
        let mut natives = NativeRegistry::new();
        StdNativeProvider.install(&mut natives);
        let native_count = natives.len();
        natives.install_into(&mut registry)?;
        registry.refresh();

        let nil = HeapObject {
            class: ClassRegistry::OBJECT,
            behaviour: registry
                .record(ClassRegistry::OBJECT)?
                .instance_behaviour()
                .clone(),
            kind: ObjectKind::Plain,
        };
        let mut rt = Self {
            registry: registry.shared(),
            heap: Heap::new(nil, config.gc_threshold),
            config,
            numeric: config.numeric,
            gc_temp_roots: Vec::new(),
        };

        let classes: Vec<ClassId> = rt.registry.read().iter().map(|r| r.id()).collect();
        for &class in &classes {
            rt.ensure_class_object(class)?;
        }
        if config.seal_builtin_classes {
            let mut registry = rt.registry.write();
            for &class in &classes {
                registry.seal(class)?;
            }
        }
        tracing::debug!(classes = classes.len(), natives = native_count, "runtime bootstrapped");
        Ok(rt)
    }

    /// The hierarchy lock. Mutations through it should be followed by
    /// `ensure_class_object` for any class they create.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The numeric settings in effect for arithmetic sends.
    pub fn numeric(&self) -> NumericSettings {
        self.numeric
    }

    pub fn set_numeric(&mut self, settings: NumericSettings) -> RexxResult<()> {
        settings.validate()?;
        self.numeric = settings;
        Ok(())
    }

    #[inline]
    pub fn nil(&self) -> ObjectId {
        ObjectId::NIL
    }

    pub fn object(&self, id: ObjectId) -> RexxResult<&HeapObject> {
        self.heap.get(id).ok_or_else(|| dead_object(id))
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub(crate) fn alloc_instance(&mut self, class: ClassId, kind: ObjectKind) -> RexxResult<ObjectId> {
        let behaviour = self.registry.read().record(class)?.instance_behaviour().clone();
        Ok(self.heap.alloc(HeapObject {
            class,
            behaviour,
            kind,
        }))
    }

    pub fn new_string(&mut self, text: &str) -> ObjectId {
        self.new_bytes(text.as_bytes())
    }

    pub fn new_bytes(&mut self, bytes: &[u8]) -> ObjectId {
        let behaviour = self
            .registry
            .read()
            .get(ClassRegistry::STRING)
            .map(|r| r.instance_behaviour().clone())
            .unwrap_or_default();
        self.heap.alloc(HeapObject {
            class: ClassRegistry::STRING,
            behaviour,
            kind: ObjectKind::Str(bytes.into()),
        })
    }

    /// Numbers are strings: the object reports class `String`.
    pub fn new_number(&mut self, number: NumberString) -> ObjectId {
        let behaviour = self
            .registry
            .read()
            .get(ClassRegistry::STRING)
            .map(|r| r.instance_behaviour().clone())
            .unwrap_or_default();
        self.heap.alloc(HeapObject {
            class: ClassRegistry::STRING,
            behaviour,
            kind: ObjectKind::Number(Arc::new(number)),
        })
    }

    pub fn new_method_object(&mut self, method: Arc<Method>) -> RexxResult<ObjectId> {
        self.alloc_instance(ClassRegistry::METHOD, ObjectKind::Method(method))
    }

    /// Allocates an instance carrying the class's current instance
    /// behaviour. Instances of `String` and its subclasses start empty.
    pub fn new_object(&mut self, class: ClassId) -> RexxResult<ObjectId> {
        let (is_class, is_string) = {
            let registry = self.registry.read();
            (
                registry.is_subclass_of(class, ClassRegistry::CLASS)?,
                registry.is_subclass_of(class, ClassRegistry::STRING)?,
            )
        };
        if is_class {
            return Err(RexxError::new(ConditionKind::InvalidObject {
                expected: "non-class",
                actual: self.registry.read().default_name(class)?,
            }));
        }
        let kind = if is_string {
            ObjectKind::Str(Box::default())
        } else {
            ObjectKind::Plain
        };
        self.alloc_instance(class, kind)
    }

    /// Allocates an instance whose private behaviour adds `methods` to the
    /// class's instance behaviour.
    pub fn new_enhanced(
        &mut self,
        class: ClassId,
        methods: &MethodDictionary,
    ) -> RexxResult<ObjectId> {
        let behaviour = self.registry.read().enhanced(class, methods)?;
        Ok(self.heap.alloc(HeapObject {
            class,
            behaviour: Arc::new(behaviour),
            kind: ObjectKind::Plain,
        }))
    }

    /// The heap object standing for `class`, allocated on first use.
    pub fn ensure_class_object(&mut self, class: ClassId) -> RexxResult<ObjectId> {
        let (existing, meta, behaviour) = {
            let registry = self.registry.read();
            let record = registry.record(class)?;
            (
                record.object(),
                registry.meta_class(class)?,
                record.class_behaviour().clone(),
            )
        };
        if !existing.is_nil() {
            return Ok(existing);
        }
        let object = self.heap.alloc(HeapObject {
            class: meta,
            behaviour,
            kind: ObjectKind::Class(class),
        });
        self.registry.write().set_object(class, object)?;
        Ok(object)
    }

    pub fn class_object(&mut self, class: ClassId) -> RexxResult<ObjectId> {
        self.ensure_class_object(class)
    }

    pub fn subclass(
        &mut self,
        parent: ClassId,
        name: &str,
        meta_class: Option<ClassId>,
    ) -> RexxResult<ClassId> {
        let class = self.registry.write().subclass(parent, name, meta_class, None)?;
        self.ensure_class_object(class)?;
        Ok(class)
    }

    pub fn mixinclass(
        &mut self,
        parent: ClassId,
        name: &str,
        meta_class: Option<ClassId>,
    ) -> RexxResult<ClassId> {
        let class = self
            .registry
            .write()
            .mixinclass(parent, name, meta_class, None)?;
        self.ensure_class_object(class)?;
        Ok(class)
    }

    /// The class of an object. A class object's class is its metaclass.
    pub fn class_of(&self, object: ObjectId) -> RexxResult<ClassId> {
        Ok(self.object(object)?.class)
    }

    /// For class objects, the class they stand for.
    pub fn as_class(&self, object: ObjectId) -> Option<ClassId> {
        match self.heap.get(object)?.kind {
            ObjectKind::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn default_name(&self, object: ObjectId) -> RexxResult<String> {
        if object.is_nil() {
            return Ok("The NIL object".to_string());
        }
        let obj = self.object(object)?;
        let registry = self.registry.read();
        match obj.kind {
            ObjectKind::Class(class) => registry.default_name(class),
            _ => Ok(registry.record(obj.class)?.instance_default_name()),
        }
    }

    /// The string an object stands for: the text of strings and numbers,
    /// the default name of anything else.
    pub fn string_value(&self, object: ObjectId) -> RexxResult<String> {
        match &self.object(object)?.kind {
            ObjectKind::Str(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            ObjectKind::Number(number) => Ok(number.string_value().to_string()),
            ObjectKind::Class(class) => Ok(self.registry.read().id(*class)?.to_string()),
            ObjectKind::Plain | ObjectKind::Method(_) => self.default_name(object),
        }
    }

    /// Raw bytes of a string object; other objects yield their string value.
    pub fn bytes_value(&self, object: ObjectId) -> RexxResult<Vec<u8>> {
        match &self.object(object)?.kind {
            ObjectKind::Str(bytes) => Ok(bytes.to_vec()),
            _ => Ok(self.string_value(object)?.into_bytes()),
        }
    }

    /// The object as a number under the current settings, `None` when its
    /// string is not numeric.
    pub fn try_number(&self, object: ObjectId) -> RexxResult<Option<Arc<NumberString>>> {
        match &self.object(object)?.kind {
            ObjectKind::Number(number) => Ok(Some(number.clone())),
            ObjectKind::Str(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                Ok(NumberString::try_parse(&text, &self.numeric)?.map(Arc::new))
            }
            _ => Ok(None),
        }
    }

    /// Like `try_number`, but a non-numeric string is a *bad arithmetic
    /// conversion*.
    pub fn number_value(&self, object: ObjectId) -> RexxResult<Arc<NumberString>> {
        match self.try_number(object)? {
            Some(number) => Ok(number),
            None => Err(RexxError::new(ConditionKind::BadArithmeticConversion(
                self.string_value(object)?,
            ))),
        }
    }
}
