use std::sync::{Arc, Mutex};

use null_object::{BoolValue, IntegerValue, NativeFnValue, NullValue, StringValue, Value};

#[test]
fn null_serializes_as_unit() {
    assert_eq!(
        serde_json::to_string(&NullValue::default()).unwrap(),
        "null"
    );
}

#[test]
fn payload_values_carry_their_kind_tag() {
    assert_eq!(
        serde_json::to_string(&BoolValue::from(true)).unwrap(),
        r#"{"kind":"Boolean","value":true}"#
    );
    assert_eq!(
        serde_json::to_string(&IntegerValue::from(42)).unwrap(),
        r#"{"kind":"Integer","value":42}"#
    );
    assert_eq!(
        serde_json::to_string(&StringValue::from("payload")).unwrap(),
        r#"{"kind":"String","value":"payload"}"#
    );
}

#[test]
fn native_fn_serializes_name_and_kind() {
    let function = NativeFnValue::new(
        "console.log".to_string(),
        Arc::new(Mutex::new(|_args: Vec<Value>| NullValue::obtain())),
    );

    assert_eq!(
        serde_json::to_string(&function).unwrap(),
        r#"{"name":"console.log","kind":"NativeFn"}"#
    );
}
