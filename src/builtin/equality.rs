use std::sync::Arc;

use crate::{BoolValue, IntegerValue, StringValue, Value, ValueType};

use super::cast_value;

/// Equality over shared handles. Two nulls always compare equal, whether
/// or not they are the canonical instance.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    // Identical handle; locking it twice below would deadlock.
    if Arc::ptr_eq(left, right) {
        return true;
    }

    let left = left.lock().expect("values_equal(): failed to get left value");
    let right = right
        .lock()
        .expect("values_equal(): failed to get right value");

    if left.kind() != right.kind() {
        return false;
    }

    match left.kind() {
        ValueType::Null => true,
        ValueType::Boolean => {
            cast_value::<BoolValue>(&left).unwrap() == cast_value::<BoolValue>(&right).unwrap()
        }
        ValueType::Integer => {
            cast_value::<IntegerValue>(&left).unwrap()
                == cast_value::<IntegerValue>(&right).unwrap()
        }
        ValueType::String => {
            cast_value::<StringValue>(&left).unwrap() == cast_value::<StringValue>(&right).unwrap()
        }
        ValueType::NativeFn | ValueType::Object => false,
    }
}
