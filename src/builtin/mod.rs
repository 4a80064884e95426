mod cast_value;
mod console;
mod equality;
mod stringify;
mod truthy;

use std::sync::{Arc, Mutex};

use crate::{ClosureType, NativeFnValue, RuntimeValue, Value};

pub use cast_value::*;
pub use console::*;
pub use equality::*;
pub use stringify::*;
pub use truthy::*;

pub fn mk_runtime_value(value: Box<dyn RuntimeValue>) -> Value {
    Arc::new(Mutex::new(value))
}

pub fn mk_native_fn(name: String, func: ClosureType) -> Value {
    Arc::new(Mutex::new(Box::new(NativeFnValue::new(name, func))))
}
