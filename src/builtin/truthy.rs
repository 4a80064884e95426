use crate::{BoolValue, IntegerValue, StringValue, Value, ValueType};

use super::cast_value;

/// Boolean-context coercion over a shared handle. Null is always false.
pub fn truthy(value: &Value) -> bool {
    let value = value.lock().expect("truthy(): failed to get value");
    match value.kind() {
        ValueType::Null => false,
        ValueType::Boolean => cast_value::<BoolValue>(&value).unwrap().value(),
        ValueType::Integer => cast_value::<IntegerValue>(&value).unwrap().value() != 0,
        ValueType::String => !cast_value::<StringValue>(&value).unwrap().value().is_empty(),
        ValueType::NativeFn | ValueType::Object => true,
    }
}
