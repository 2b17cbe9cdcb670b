mod common;

use common::{runtime, runtime_with, text};
use orx_runtime::{ClassRegistry, GcStats, RuntimeConfig};

#[test]
fn collect_keeps_roots_and_class_objects() {
    let mut rt = runtime();
    assert_eq!(rt.heap().live_count(), 5);

    let keep = rt.new_string("keep");
    let drop_a = rt.new_string("a");
    let drop_b = rt.new_string("b");
    assert_eq!(rt.heap().live_count(), 8);
    let bytes_before = rt.heap().memory_bytes();

    let stats = rt.collect(&[keep]);
    assert_eq!(stats, GcStats { marked: 6, swept: 2 });
    assert_eq!(rt.heap().live_count(), 6);
    assert!(rt.heap().memory_bytes() < bytes_before);
    assert!(rt.heap().contains(keep));
    assert!(!rt.heap().contains(drop_a));
    assert!(rt.object(drop_b).is_err());
    assert_eq!(text(&rt, keep), "keep");

    let string_class = rt.class_object(ClassRegistry::STRING).unwrap();
    assert!(rt.heap().contains(string_class));
    assert!(rt.heap().contains(rt.nil()));
}

#[test]
fn new_classes_survive_collection() {
    let mut rt = runtime();
    let a = rt.subclass(ClassRegistry::OBJECT, "A", None).unwrap();
    let class_object = rt.class_object(a).unwrap();
    let instance = rt.new_object(a).unwrap();
    rt.collect(&[]);
    assert!(rt.heap().contains(class_object));
    assert!(!rt.heap().contains(instance));
    let fresh = rt.send(class_object, "NEW", &[]).unwrap();
    assert_eq!(rt.class_of(fresh).unwrap(), a);
}

#[test]
fn collection_runs_after_threshold() {
    let mut rt = runtime_with(RuntimeConfig {
        gc_threshold: 3,
        ..RuntimeConfig::default()
    });
    let stats = rt.maybe_gc(&[]).unwrap();
    assert_eq!(stats, GcStats { marked: 5, swept: 0 });
    assert!(rt.maybe_gc(&[]).is_none());
}
