//! Integration tests for Value and ParamType

use patrolbot_foundation::{ParamType, Point3, Value};
use std::collections::HashSet;

// =============================================================================
// Value accessors
// =============================================================================

#[test]
fn value_types() {
    assert_eq!(Value::Bool(true).param_type(), ParamType::Bool);
    assert_eq!(Value::Int(3).param_type(), ParamType::Int);
    assert_eq!(Value::Float(2.5).param_type(), ParamType::Float);
    assert_eq!(Value::from("hi").param_type(), ParamType::String);
    assert_eq!(
        Value::Point(Point3::new(1.0, 2.0, 3.0)).param_type(),
        ParamType::Point3
    );
}

#[test]
fn value_accessors() {
    assert_eq!(Value::from("route").as_str(), Some("route"));
    assert_eq!(Value::Int(7).as_number(), Some(7.0));
    assert_eq!(Value::Float(1.5).as_number(), Some(1.5));
    assert_eq!(Value::Bool(true).as_int(), None);
    assert_eq!(
        Value::Point(Point3::new(1.0, 2.0, 3.0)).as_point(),
        Some(Point3::new(1.0, 2.0, 3.0))
    );
}

#[test]
fn values_are_hashable() {
    let set: HashSet<Value> = [Value::Float(1.0), Value::Float(1.0), Value::Int(1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn value_display() {
    assert_eq!(Value::from("a b").to_string(), "a b");
    assert_eq!(format!("{:?}", Value::from("a b")), "\"a b\"");
}

// =============================================================================
// ParamType names
// =============================================================================

#[test]
fn param_type_aliases() {
    assert_eq!("boolean".parse::<ParamType>().unwrap(), ParamType::Bool);
    assert_eq!("number".parse::<ParamType>().unwrap(), ParamType::Float);
    assert_eq!("vec3".parse::<ParamType>().unwrap(), ParamType::Point3);
    assert_eq!(
        "direction".parse::<ParamType>().unwrap(),
        ParamType::custom("direction")
    );
}

#[test]
fn param_type_rejects_bad_names() {
    assert!("".parse::<ParamType>().is_err());
    assert!("two words".parse::<ParamType>().is_err());
}
