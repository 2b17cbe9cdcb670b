mod common;

use common::{runtime, send_text, text};
use orx_condition::{ConditionKind, codes};
use orx_core::value::ordered_map_new;
use orx_runtime::{ClassRegistry, Method, MethodDictionary, ObjectKind, RuntimeConfig};

const OBJECT: orx_runtime::ClassId = ClassRegistry::OBJECT;

#[test]
fn old_instances_keep_the_behaviour_they_were_created_with() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    rt.registry()
        .write()
        .define_method(a, "GREET", Some(Method::constant("GREET", "hello from A")))
        .unwrap();
    let b = rt.subclass(a, "B", None).unwrap();

    let old_b = rt.new_object(b).unwrap();
    assert_eq!(send_text(&mut rt, old_b, "greet", &[]), "hello from A");

    rt.registry()
        .write()
        .define_method(b, "GREET", Some(Method::constant("GREET", "hello from B")))
        .unwrap();
    let new_b = rt.new_object(b).unwrap();
    let an_a = rt.new_object(a).unwrap();
    assert_eq!(send_text(&mut rt, new_b, "GREET", &[]), "hello from B");
    assert_eq!(send_text(&mut rt, an_a, "GREET", &[]), "hello from A");
    assert_eq!(send_text(&mut rt, old_b, "GREET", &[]), "hello from A");
}

#[test]
fn occluded_method_is_not_understood() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    rt.registry()
        .write()
        .define_method(a, "GREET", Some(Method::constant("GREET", "hi")))
        .unwrap();
    let b = rt.subclass(a, "B", None).unwrap();
    rt.registry().write().define_method(b, "GREET", None).unwrap();

    let obj = rt.new_object(b).unwrap();
    let err = rt.send(obj, "GREET", &[]).unwrap_err();
    assert_eq!(
        err.kind,
        ConditionKind::NoMethod {
            receiver: "a B".to_string(),
            message: "GREET".to_string(),
        }
    );
    assert_eq!(err.code, codes::NO_METHOD);
    assert!(!rt.responds_to(obj, "greet").unwrap());
    assert_eq!(send_text(&mut rt, obj, "HASMETHOD", &["greet"]), "0");
    assert_eq!(send_text(&mut rt, obj, "HASMETHOD", &["init"]), "1");
}

#[test]
fn send_super_runs_the_overridden_method() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    let b = rt.subclass(a, "B", None).unwrap();
    {
        let mut registry = rt.registry().write();
        registry
            .define_method(a, "GREET", Some(Method::constant("GREET", "from A")))
            .unwrap();
        registry
            .define_method(b, "GREET", Some(Method::constant("GREET", "from B")))
            .unwrap();
    }
    let obj = rt.new_object(b).unwrap();
    let result = rt.send_super(obj, "GREET", b, &[]).unwrap();
    assert_eq!(text(&rt, result), "from A");
    assert!(rt.send_super(obj, "GREET", a, &[]).is_err());
}

#[test]
fn object_methods() {
    let mut rt = runtime();
    let apple = rt.subclass(OBJECT, "Apple", None).unwrap();
    let obj = rt.new_object(apple).unwrap();
    let other = rt.new_object(apple).unwrap();

    assert_eq!(send_text(&mut rt, obj, "DEFAULTNAME", &[]), "an Apple");
    assert_eq!(send_text(&mut rt, obj, "string", &[]), "an Apple");
    let class = rt.send(obj, "CLASS", &[]).unwrap();
    assert_eq!(rt.as_class(class), Some(apple));
    assert_eq!(send_text(&mut rt, class, "ID", &[]), "Apple");
    assert_eq!(send_text(&mut rt, class, "DEFAULTNAME", &[]), "The Apple class");

    let same = rt.send(obj, "==", &[obj]).unwrap();
    assert_eq!(text(&rt, same), "1");
    let different = rt.send(obj, "==", &[other]).unwrap();
    assert_eq!(text(&rt, different), "0");
    let not_same = rt.send(obj, "\\=", &[other]).unwrap();
    assert_eq!(text(&rt, not_same), "1");

    assert_eq!(rt.default_name(rt.nil()).unwrap(), "The NIL object");
}

#[test]
fn class_object_of_a_class_object_is_its_metaclass() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    let a_object = rt.class_object(a).unwrap();
    let meta = rt.send(a_object, "CLASS", &[]).unwrap();
    assert_eq!(rt.as_class(meta), Some(ClassRegistry::CLASS));
    let meta_again = rt.send(a_object, "METACLASS", &[]).unwrap();
    assert_eq!(meta, meta_again);
}

#[test]
fn classes_built_through_messages() {
    let mut rt = runtime();
    let object = rt.class_object(OBJECT).unwrap();

    let name = rt.new_string("Animal");
    let animal = rt.send(object, "SUBCLASS", &[name]).unwrap();
    assert_eq!(send_text(&mut rt, animal, "ID", &[]), "Animal");
    assert_eq!(send_text(&mut rt, animal, "SUPERCLASSES", &[]), "Object");
    assert_eq!(send_text(&mut rt, object, "SUBCLASSES", &[]), "Class String Method Animal");
    assert_eq!(send_text(&mut rt, animal, "DEFINE", &["speak", "..."]), "The NIL object");

    let name = rt.new_string("Swimmer");
    let swimmer = rt.send(animal, "MIXINCLASS", &[name]).unwrap();
    assert_eq!(send_text(&mut rt, swimmer, "QUERYMIXINCLASS", &[]), "1");
    assert_eq!(send_text(&mut rt, animal, "QUERYMIXINCLASS", &[]), "0");
    let base = rt.send(swimmer, "BASECLASS", &[]).unwrap();
    assert_eq!(base, animal);
    send_text(&mut rt, swimmer, "DEFINE", &["swim", "splash"]);

    let name = rt.new_string("Fish");
    let fish = rt.send(animal, "SUBCLASS", &[name]).unwrap();
    rt.send(fish, "INHERIT", &[swimmer]).unwrap();
    assert_eq!(send_text(&mut rt, fish, "SUPERCLASSES", &[]), "Animal Swimmer");
    let yes = rt.send(fish, "ISSUBCLASSOF", &[swimmer]).unwrap();
    assert_eq!(text(&rt, yes), "1");

    let nemo = rt.send(fish, "NEW", &[]).unwrap();
    assert_eq!(send_text(&mut rt, nemo, "SWIM", &[]), "splash");
    assert_eq!(send_text(&mut rt, nemo, "SPEAK", &[]), "...");

    rt.send(fish, "UNINHERIT", &[swimmer]).unwrap();
    assert_eq!(send_text(&mut rt, fish, "SUPERCLASSES", &[]), "Animal");
    let dory = rt.send(fish, "NEW", &[]).unwrap();
    assert!(rt.send(dory, "SWIM", &[]).is_err());
    // created before the uninherit
    assert_eq!(send_text(&mut rt, nemo, "SWIM", &[]), "splash");
}

#[test]
fn define_with_method_object_and_delete() {
    let mut rt = runtime();
    let object = rt.class_object(OBJECT).unwrap();
    let name = rt.new_string("Dog");
    let dog = rt.send(object, "SUBCLASS", &[name]).unwrap();
    send_text(&mut rt, dog, "DEFINE", &["BARK", "woof"]);

    let bark_name = rt.new_string("BARK");
    let bark = rt.send(dog, "METHOD", &[bark_name]).unwrap();
    assert!(matches!(rt.object(bark).unwrap().kind, ObjectKind::Method(_)));
    let talk = rt.new_string("TALK");
    rt.send(dog, "DEFINE", &[talk, bark]).unwrap();
    send_text(&mut rt, dog, "DELETE", &["bark"]);

    let rex = rt.send(dog, "NEW", &[]).unwrap();
    assert_eq!(send_text(&mut rt, rex, "TALK", &[]), "woof");
    assert!(rt.send(rex, "BARK", &[]).is_err());

    // DEFINE without a method hides the inherited one
    send_text(&mut rt, dog, "DEFINE", &["string"]);
    let fido = rt.send(dog, "NEW", &[]).unwrap();
    assert!(rt.send(fido, "STRING", &[]).is_err());
    let occluded_name = rt.new_string("STRING");
    let occluded = rt.send(dog, "METHOD", &[occluded_name]).unwrap();
    assert_eq!(occluded, rt.nil());
}

#[test]
fn class_side_through_a_metaclass() {
    let mut rt = runtime();
    let meta = rt.subclass(ClassRegistry::CLASS, "Meta", None).unwrap();
    rt.registry()
        .write()
        .define_method(meta, "DESCRIBE", Some(Method::constant("DESCRIBE", "made by Meta")))
        .unwrap();
    let k = rt.subclass(OBJECT, "K", Some(meta)).unwrap();
    let k_object = rt.class_object(k).unwrap();
    assert_eq!(send_text(&mut rt, k_object, "DESCRIBE", &[]), "made by Meta");
    let meta_object = rt.send(k_object, "METACLASS", &[]).unwrap();
    assert_eq!(rt.as_class(meta_object), Some(meta));

    let instance = rt.send(k_object, "NEW", &[]).unwrap();
    assert!(rt.send(instance, "DESCRIBE", &[]).is_err());

    rt.registry()
        .write()
        .define_class_method(k, "TAG", Some(Method::constant("TAG", "k-tag")))
        .unwrap();
    let k2 = rt.subclass(k, "K2", None).unwrap();
    let k2_object = rt.class_object(k2).unwrap();
    assert_eq!(send_text(&mut rt, k2_object, "TAG", &[]), "k-tag");
    assert_eq!(send_text(&mut rt, k2_object, "DESCRIBE", &[]), "made by Meta");
    // class objects see class-side changes made after they were created
    rt.registry()
        .write()
        .define_class_method(k, "TAG", Some(Method::constant("TAG", "retagged")))
        .unwrap();
    assert_eq!(send_text(&mut rt, k2_object, "TAG", &[]), "retagged");
}

#[test]
fn builtin_classes_are_sealed() {
    let mut rt = runtime();
    let string = rt.class_object(ClassRegistry::STRING).unwrap();
    let name = rt.new_string("LEN");
    let err = rt.send(string, "DEFINE", &[name]).unwrap_err();
    assert_eq!(err.kind, ConditionKind::SealedClass("String".to_string()));

    let object = rt.class_object(OBJECT).unwrap();
    let name = rt.new_string("Mixin");
    let mixin = rt.send(object, "MIXINCLASS", &[name]).unwrap();
    assert!(rt.send(object, "INHERIT", &[mixin]).is_err());
}

#[test]
fn unsealed_bootstrap_when_configured() {
    let mut rt = common::runtime_with(RuntimeConfig {
        seal_builtin_classes: false,
        ..RuntimeConfig::default()
    });
    rt.registry()
        .write()
        .define_method(ClassRegistry::STRING, "SHOUT", Some(Method::constant("SHOUT", "HEY")))
        .unwrap();
    let s = rt.new_string("x");
    assert_eq!(send_text(&mut rt, s, "SHOUT", &[]), "HEY");
}

#[test]
fn enhanced_objects() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    let mut extra: MethodDictionary = ordered_map_new();
    extra.insert("EXTRA".into(), Some(Method::constant("EXTRA", "only me")));
    let special = rt.new_enhanced(a, &extra).unwrap();
    let plain = rt.new_object(a).unwrap();
    assert_eq!(send_text(&mut rt, special, "EXTRA", &[]), "only me");
    assert!(rt.send(plain, "EXTRA", &[]).is_err());
    assert_eq!(rt.class_of(special).unwrap(), a);
}

#[test]
fn argument_checks() {
    let mut rt = runtime();
    let a = rt.subclass(OBJECT, "A", None).unwrap();
    let obj = rt.new_object(a).unwrap();
    let err = rt.send(obj, "HASMETHOD", &[]).unwrap_err();
    assert_eq!(
        err.kind,
        ConditionKind::ArgumentCountMismatch {
            expected_min: 1,
            expected_max: 1,
            actual: 0,
        }
    );

    let object = rt.class_object(OBJECT).unwrap();
    let not_a_class = rt.new_string("nope");
    let err = rt.send(object, "INHERIT", &[not_a_class]).unwrap_err();
    assert!(matches!(err.kind, ConditionKind::InvalidObject { expected: "class", .. }));

    let empty = rt.new_string("");
    let err = rt.send(object, "SUBCLASS", &[empty]).unwrap_err();
    assert_eq!(err.kind, ConditionKind::InvalidClassName);
}

#[test]
fn string_subclass_instances_are_strings() {
    let mut rt = common::runtime();
    let s = rt.subclass(ClassRegistry::STRING, "Name", None).unwrap();
    let obj = rt.new_object(s).unwrap();
    assert_eq!(text(&rt, obj), "");
    assert_eq!(send_text(&mut rt, obj, "LENGTH", &[]), "0");
}

#[test]
fn method_objects_built_by_the_method_class() {
    let mut rt = runtime();
    let method_class = rt.class_object(ClassRegistry::METHOD).unwrap();
    let name = rt.new_string("greet");
    let body = rt.new_string("hello there");
    let greet = rt.send(method_class, "NEW", &[name, body]).unwrap();
    assert_eq!(rt.class_of(greet).unwrap(), ClassRegistry::METHOD);
    assert_eq!(send_text(&mut rt, greet, "NAME", &[]), "GREET");
    assert_eq!(send_text(&mut rt, greet, "SOURCE", &[]), "hello there");

    let object = rt.class_object(OBJECT).unwrap();
    let name = rt.new_string("Host");
    let host = rt.send(object, "SUBCLASS", &[name]).unwrap();
    let message = rt.new_string("GREET");
    rt.send(host, "DEFINE", &[message, greet]).unwrap();
    let guest = rt.send(host, "NEW", &[]).unwrap();
    assert_eq!(send_text(&mut rt, guest, "GREET", &[]), "hello there");

    let err = rt.send(method_class, "NEW", &[message]).unwrap_err();
    assert!(matches!(err.kind, ConditionKind::ArgumentCountMismatch { .. }));
}

#[test]
fn native_and_constant_methods() {
    let mut rt = runtime();
    let string_class = rt.class_object(ClassRegistry::STRING).unwrap();
    let plus = rt.new_string("+");
    let native = rt.send(string_class, "METHOD", &[plus]).unwrap();
    assert_eq!(send_text(&mut rt, native, "SOURCE", &[]), "");
    match &rt.object(native).unwrap().kind {
        ObjectKind::Method(method) => assert!(method.is_native()),
        other => panic!("expected a method, got {other:?}"),
    }
    assert!(!Method::constant("X", "x").is_native());

    let word = rt.new_string("word");
    let err = rt.send(word, "NAME", &[]).unwrap_err();
    assert!(matches!(err.kind, ConditionKind::NoMethod { .. }));
}
