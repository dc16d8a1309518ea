use crate::{FlowPrimitive, PrimitiveTable};

#[test]
fn maps_go_primitives() {
    let table = PrimitiveTable::global();

    assert_eq!(table.lookup("bool"), Some(FlowPrimitive::Boolean));
    assert_eq!(table.lookup("string"), Some(FlowPrimitive::String));
    assert_eq!(table.lookup("int"), Some(FlowPrimitive::Number));
    assert_eq!(table.lookup("int64"), Some(FlowPrimitive::Number));
    assert_eq!(table.lookup("uint8"), Some(FlowPrimitive::Number));
    assert_eq!(table.lookup("float64"), Some(FlowPrimitive::Number));
}

#[test]
fn maps_qualified_time() {
    let table = PrimitiveTable::global();

    assert_eq!(table.lookup("time.Time"), Some(FlowPrimitive::String));
    assert_eq!(table.lookup("Time"), None);
    assert_eq!(table.lookup("time.Duration"), None);
}

#[test]
fn rejects_non_primitives() {
    let table = PrimitiveTable::global();

    assert!(!table.contains("error"));
    assert!(!table.contains("any"));
    assert!(!table.contains("complex128"));
    assert!(!table.contains("Category"));
}

#[test]
fn global_is_shared() {
    assert!(std::ptr::eq(PrimitiveTable::global(), PrimitiveTable::global()));
    assert_eq!(PrimitiveTable::global().len(), 18);
}

#[test]
fn flow_names() {
    assert_eq!(FlowPrimitive::Boolean.as_str(), "boolean");
    assert_eq!(FlowPrimitive::Number.as_str(), "number");
    assert_eq!(FlowPrimitive::String.as_str(), "string");
}
