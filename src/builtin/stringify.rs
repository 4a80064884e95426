use crate::{
    BoolValue, IntegerValue, NativeFnValue, ObjectValue, RuntimeValue, StringValue, ValueType,
};

use super::cast_value;

/// Text-context coercion. Null renders as empty text, not as a
/// placeholder word, so interpolation leaves no trace of the stand-in.
pub fn stringify(value: Box<dyn RuntimeValue>) -> String {
    match value.kind() {
        ValueType::Null => String::new(),
        ValueType::Boolean => {
            let boolean = cast_value::<BoolValue>(&value).unwrap();
            boolean.value().to_string()
        }
        ValueType::Integer => cast_value::<IntegerValue>(&value)
            .unwrap()
            .value()
            .to_string(),
        ValueType::String => cast_value::<StringValue>(&value).unwrap().value(),
        ValueType::NativeFn => {
            let function = cast_value::<NativeFnValue>(&value).unwrap();
            format!("<native-function {}>", function.name)
        }
        ValueType::Object => {
            let object = cast_value::<ObjectValue>(&value).unwrap();
            format!("<object ({} pairs)>", object.map().len())
        }
    }
}
