use cumulant_core::{FunctionDefinition, FunctionRegistry, LifecycleState, PureFunction, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn user_def(name: &str) -> FunctionDefinition {
    PureFunction::new(name, &["x"], "x + 1").unwrap().into()
}

#[test]
fn test_seeds_full_predefined_catalog() {
    let registry = FunctionRegistry::new("p1");
    assert_eq!(registry.len(), 11);

    for name in [
        "count",
        "sum",
        "avg",
        "max",
        "min",
        "innerproduct",
        "midpoint",
        "product",
        "distance",
        "dist2line",
        "dist2lnseg",
    ] {
        assert_eq!(
            registry.lifecycle(name),
            Some(LifecycleState::PredefinedInactive),
            "missing predefined function: {}",
            name
        );
    }
}

#[test]
fn test_get_latches_activation() {
    let mut registry = FunctionRegistry::new("p1");

    let def = registry.get("count").expect("count is predefined");
    assert_eq!(def.name(), "count");
    assert_eq!(
        registry.lifecycle("count"),
        Some(LifecycleState::PredefinedActive)
    );

    // Subsequent gets keep returning the definition, state unchanged.
    assert!(registry.get("count").is_some());
    assert_eq!(
        registry.lifecycle("count"),
        Some(LifecycleState::PredefinedActive)
    );
}

#[test]
fn test_put_after_get_fails() {
    let mut registry = FunctionRegistry::new("p1");
    registry.get("count").unwrap();

    let err = registry.put("count", user_def("count")).unwrap_err();
    assert_eq!(err.name, "count");
    assert_eq!(err.profile, "p1");
    assert!(err.to_string().contains("already assigned"));
}

#[test]
fn test_put_before_get_replaces_predefined_once() {
    let mut registry = FunctionRegistry::new("p1");

    // Never read: the predefined entry may be replaced exactly once.
    registry.put("count", user_def("count")).unwrap();
    assert_eq!(
        registry.lifecycle("count"),
        Some(LifecycleState::UserDefined)
    );

    // The replacement, not the predefined fold, is what get returns.
    let def = registry.get("count").unwrap();
    assert!(matches!(def, FunctionDefinition::Pure(_)));

    // And it is itself no longer replaceable.
    assert!(registry.put("count", user_def("count")).is_err());
}

#[test]
fn test_put_new_name_then_overwrite_fails() {
    let mut registry = FunctionRegistry::new("p1");

    registry.put("twice", user_def("twice")).unwrap();
    assert_eq!(
        registry.lifecycle("twice"),
        Some(LifecycleState::UserDefined)
    );
    assert!(registry.put("twice", user_def("twice")).is_err());
}

#[test]
fn test_get_absent_name() {
    let mut registry = FunctionRegistry::new("p1");
    assert!(registry.get("no_such_function").is_none());
    assert_eq!(registry.lifecycle("no_such_function"), None);
}

#[test]
fn test_cleanup_empties_without_reseeding() {
    let mut registry = FunctionRegistry::new("p1");
    registry.get("sum").unwrap();
    registry.put("mine", user_def("mine")).unwrap();

    registry.cleanup();
    assert!(registry.is_empty());
    assert!(registry.get("count").is_none());
    assert!(registry.get("sum").is_none());
    assert!(registry.get("mine").is_none());

    // A previously active name is overwritable again after cleanup.
    registry.put("sum", user_def("sum")).unwrap();
}

#[test]
fn test_registries_are_per_profile() {
    let mut one = FunctionRegistry::new("p1");
    let mut two = FunctionRegistry::new("p2");

    one.get("count").unwrap();
    // Activation in one profile does not leak into the other.
    assert_eq!(
        two.lifecycle("count"),
        Some(LifecycleState::PredefinedInactive)
    );
    two.put("count", user_def("count")).unwrap();
    assert!(one.put("count", user_def("count")).is_err());
}

#[test]
fn test_predefined_sum_folds() {
    let mut registry = FunctionRegistry::new("p1");
    let def = registry.get("sum").unwrap();

    let mut sum = match def {
        FunctionDefinition::Fold(f) => f.clone(),
        other => panic!("sum should be a fold function, got {}", other.render()),
    };

    sum.initialize();
    sum.apply(&[num(3.0)]).unwrap();
    sum.apply(&[num(4.0)]).unwrap();
    assert_eq!(sum.compute().unwrap(), num(7.0));
}

#[test]
fn test_predefined_min_max_from_sentinels() {
    let mut registry = FunctionRegistry::new("p1");

    let mut max = match registry.get("max").unwrap() {
        FunctionDefinition::Fold(f) => f.clone(),
        _ => unreachable!(),
    };
    let mut min = match registry.get("min").unwrap() {
        FunctionDefinition::Fold(f) => f.clone(),
        _ => unreachable!(),
    };

    max.initialize();
    min.initialize();
    for x in [3.0, -1.0, 4.0, 1.0, 5.0] {
        max.apply(&[num(x)]).unwrap();
        min.apply(&[num(x)]).unwrap();
    }
    assert_eq!(max.compute().unwrap(), num(5.0));
    assert_eq!(min.compute().unwrap(), num(-1.0));
}

#[test]
fn test_predefined_midpoint_of_segment_endpoints() {
    let mut registry = FunctionRegistry::new("p1");
    let mut midpoint = match registry.get("midpoint").unwrap() {
        FunctionDefinition::Fold(f) => f.clone(),
        _ => unreachable!(),
    };

    midpoint.initialize();
    midpoint
        .apply(&[Value::Vector([0.0, 0.0, 0.0]), Value::Vector([2.0, 2.0, 0.0])])
        .unwrap();
    midpoint
        .apply(&[Value::Vector([0.0, 2.0, 0.0]), Value::Vector([2.0, 0.0, 0.0])])
        .unwrap();
    assert_eq!(midpoint.compute().unwrap(), Value::Vector([1.0, 1.0, 0.0]));
}

#[test]
fn test_predefined_innerproduct() {
    let mut registry = FunctionRegistry::new("p1");
    let mut ip = match registry.get("innerproduct").unwrap() {
        FunctionDefinition::Fold(f) => f.clone(),
        _ => unreachable!(),
    };

    ip.initialize();
    for (x, y) in [(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)] {
        ip.apply(&[num(x), num(y)]).unwrap();
    }
    assert_eq!(ip.compute().unwrap(), num(32.0));
}

#[test]
fn test_predefined_distance_functions() {
    let mut registry = FunctionRegistry::new("p1");

    let distance = match registry.get("distance").unwrap() {
        FunctionDefinition::Pure(f) => f.clone(),
        _ => unreachable!(),
    };
    assert_eq!(
        distance
            .apply(&[Value::Vector([0.0, 0.0, 0.0]), Value::Vector([3.0, 4.0, 0.0])])
            .unwrap(),
        num(5.0)
    );

    let dist2line = match registry.get("dist2line").unwrap() {
        FunctionDefinition::Pure(f) => f.clone(),
        _ => unreachable!(),
    };
    // Unit-direction line along x through the origin, point at height 2.
    assert_eq!(
        dist2line
            .apply(&[
                Value::Vector([5.0, 2.0, 0.0]),
                Value::Vector([0.0, 0.0, 0.0]),
                Value::Vector([1.0, 0.0, 0.0]),
            ])
            .unwrap(),
        num(2.0)
    );
}

#[test]
fn test_predefined_segment_distance_clamps() {
    let mut registry = FunctionRegistry::new("p1");
    let dist2lnseg = match registry.get("dist2lnseg").unwrap() {
        FunctionDefinition::Pure(f) => f.clone(),
        _ => unreachable!(),
    };

    let tail = Value::Vector([0.0, 0.0, 0.0]);
    let head = Value::Vector([10.0, 0.0, 0.0]);

    // Beside the segment: perpendicular distance.
    assert_eq!(
        dist2lnseg
            .apply(&[Value::Vector([5.0, 3.0, 0.0]), tail, head])
            .unwrap(),
        num(3.0)
    );
    // Before the tail: distance to the tail endpoint.
    assert_eq!(
        dist2lnseg
            .apply(&[Value::Vector([-3.0, 4.0, 0.0]), tail, head])
            .unwrap(),
        num(5.0)
    );
    // Past the head: distance to the head endpoint.
    assert_eq!(
        dist2lnseg
            .apply(&[Value::Vector([13.0, 4.0, 0.0]), tail, head])
            .unwrap(),
        num(5.0)
    );
}
