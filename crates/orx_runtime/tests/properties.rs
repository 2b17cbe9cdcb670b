use orx_core::ClassId;
use orx_runtime::ClassRegistry;
use proptest::prelude::*;

const CLASSES: usize = 8;

#[derive(Debug, Clone)]
enum Step {
    Inherit(usize, usize, bool),
    Uninherit(usize, usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..CLASSES, 0..CLASSES, any::<bool>()).prop_map(|(r, m, p)| Step::Inherit(r, m, p)),
        1 => (0..CLASSES, 0..CLASSES).prop_map(|(r, m)| Step::Uninherit(r, m)),
    ]
}

/// Even indices are mixins below `Object`, odd ones plain classes.
fn build() -> (ClassRegistry, Vec<ClassId>) {
    let mut registry = ClassRegistry::new();
    let classes = (0..CLASSES)
        .map(|i| {
            let name = format!("C{i}");
            let created = if i % 2 == 0 {
                registry.mixinclass(ClassRegistry::OBJECT, &name, None, None)
            } else {
                registry.subclass(ClassRegistry::OBJECT, &name, None, None)
            };
            created.unwrap()
        })
        .collect();
    (registry, classes)
}

fn reaches(registry: &ClassRegistry, from: ClassId, target: ClassId, depth: usize) -> bool {
    if depth > CLASSES + 4 {
        return true;
    }
    registry
        .super_classes(from)
        .unwrap()
        .into_iter()
        .any(|s| s == target || reaches(registry, s, target, depth + 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn hierarchy_stays_acyclic(steps in prop::collection::vec(step(), 1..24)) {
        let (mut registry, classes) = build();
        for step in steps {
            match step {
                Step::Inherit(r, m, positioned) => {
                    let position = if positioned {
                        registry.super_classes(classes[r]).unwrap().last().copied()
                    } else {
                        None
                    };
                    let before = registry.super_classes(classes[r]).unwrap();
                    if registry.inherit(classes[r], classes[m], position).is_err() {
                        prop_assert_eq!(registry.super_classes(classes[r]).unwrap(), before);
                    }
                }
                Step::Uninherit(r, m) => {
                    let _ = registry.uninherit(classes[r], classes[m]);
                }
            }
        }
        for &class in &classes {
            prop_assert!(!reaches(&registry, class, class, 0));
            let supers = registry.super_classes(class).unwrap();
            prop_assert_eq!(supers[0], ClassRegistry::OBJECT);
            for ancestor in supers {
                prop_assert!(registry.is_subclass_of(class, ancestor).unwrap());
            }
        }
    }
}
