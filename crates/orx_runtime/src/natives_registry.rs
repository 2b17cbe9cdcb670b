use orx_condition::RexxResult;
use orx_core::{ClassId, MethodName};

use crate::class::ClassRegistry;
use crate::method::{Method, NativeFn};
use crate::methods::{class, method, object, string};

struct NativeEntry {
    class: ClassId,
    name: MethodName,
    fun: NativeFn,
    class_side: bool,
}

/// Native methods waiting to be installed on the bootstrap classes.
pub struct NativeRegistry {
    entries: Vec<NativeEntry>,
}

impl NativeRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, class: ClassId, name: &str, fun: NativeFn) {
        self.entries.push(NativeEntry {
            class,
            name: MethodName::new(name),
            fun,
            class_side: false,
        });
    }

    pub fn register_class_method(&mut self, class: ClassId, name: &str, fun: NativeFn) {
        self.entries.push(NativeEntry {
            class,
            name: MethodName::new(name),
            fun,
            class_side: true,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<MethodName> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Adds every entry to its class's own dictionary. Behaviours are not
    /// re-derived; call `ClassRegistry::refresh` afterwards.
    pub fn install_into(self, registry: &mut ClassRegistry) -> RexxResult<()> {
        for entry in self.entries {
            let method = Method::native(entry.name.clone(), entry.fun);
            registry.install_method(entry.class, entry.name, method, entry.class_side)?;
        }
        Ok(())
    }
}

impl Default for NativeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait NativeProvider {
    fn install(&self, registry: &mut NativeRegistry);
}

pub struct StdNativeProvider;

impl NativeProvider for StdNativeProvider {
    fn install(&self, registry: &mut NativeRegistry) {
        const OBJECT: ClassId = ClassRegistry::OBJECT;
        const CLASS: ClassId = ClassRegistry::CLASS;
        const STRING: ClassId = ClassRegistry::STRING;
        const METHOD: ClassId = ClassRegistry::METHOD;

        registry.register(OBJECT, "CLASS", object::object_class);
        registry.register(OBJECT, "STRING", object::object_string);
        registry.register(OBJECT, "DEFAULTNAME", object::object_default_name);
        registry.register(OBJECT, "HASMETHOD", object::object_has_method);
        registry.register(OBJECT, "INIT", object::object_init);
        registry.register(OBJECT, "==", object::object_identical);
        registry.register(OBJECT, "\\==", object::object_not_identical);
        registry.register(OBJECT, "=", object::object_identical);
        registry.register(OBJECT, "\\=", object::object_not_identical);

        // Class is its own metaclass, so these are instance methods of Class
        // and reach every class object through the class side.
        registry.register(CLASS, "NEW", class::class_new);
        registry.register(CLASS, "ID", class::class_id);
        registry.register(CLASS, "SUBCLASS", class::class_subclass);
        registry.register(CLASS, "MIXINCLASS", class::class_mixinclass);
        registry.register(CLASS, "INHERIT", class::class_inherit);
        registry.register(CLASS, "UNINHERIT", class::class_uninherit);
        registry.register(CLASS, "BASECLASS", class::class_base_class);
        registry.register(CLASS, "METACLASS", class::class_meta_class);
        registry.register(CLASS, "SUPERCLASSES", class::class_superclasses);
        registry.register(CLASS, "SUBCLASSES", class::class_subclasses);
        registry.register(CLASS, "QUERYMIXINCLASS", class::class_query_mixin);
        registry.register(CLASS, "ISSUBCLASSOF", class::class_is_subclass_of);
        registry.register(CLASS, "DEFINE", class::class_define);
        registry.register(CLASS, "DELETE", class::class_delete);
        registry.register(CLASS, "METHOD", class::class_method);

        registry.register_class_method(METHOD, "NEW", method::method_new);
        registry.register(METHOD, "NAME", method::method_name);
        registry.register(METHOD, "SOURCE", method::method_source);

        // arithmetic
        registry.register(STRING, "+", string::string_plus);
        registry.register(STRING, "-", string::string_minus);
        registry.register(STRING, "*", string::string_multiply);
        registry.register(STRING, "/", string::string_divide);
        registry.register(STRING, "%", string::string_integer_divide);
        registry.register(STRING, "//", string::string_remainder);
        registry.register(STRING, "**", string::string_power);
        // comparison
        registry.register(STRING, "=", string::string_equal);
        registry.register(STRING, "\\=", string::string_not_equal);
        registry.register(STRING, "<", string::string_less);
        registry.register(STRING, ">", string::string_greater);
        registry.register(STRING, "<=", string::string_less_equal);
        registry.register(STRING, ">=", string::string_greater_equal);
        registry.register(STRING, "==", string::string_strict_equal);
        registry.register(STRING, "\\==", string::string_strict_not_equal);
        // built-in functions
        registry.register(STRING, "ABS", string::string_abs);
        registry.register(STRING, "SIGN", string::string_sign);
        registry.register(STRING, "TRUNC", string::string_trunc);
        registry.register(STRING, "FORMAT", string::string_format);
        registry.register(STRING, "MAX", string::string_max);
        registry.register(STRING, "MIN", string::string_min);
        registry.register(STRING, "D2X", string::string_d2x);
        registry.register(STRING, "D2C", string::string_d2c);
        registry.register(STRING, "X2D", string::string_x2d);
        registry.register(STRING, "C2D", string::string_c2d);
        registry.register(STRING, "LENGTH", string::string_length);
        registry.register(STRING, "DATATYPE", string::string_datatype);
    }
}
