use std::{
    fmt,
    sync::{Arc, Mutex},
};

use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::{RuntimeValue, Value, ValueType};

pub type ClosureType = Arc<Mutex<dyn Fn(Vec<Value>) -> Value + Send + Sync>>;

#[derive(Clone)]
pub struct NativeFnValue {
    pub name: String,
    kind: ValueType,
    call: ClosureType,
}

impl NativeFnValue {
    pub fn new(name: String, call: ClosureType) -> Self {
        Self {
            kind: ValueType::NativeFn,
            name,
            call,
        }
    }

    pub fn run(&self, args: Vec<Value>) -> Value {
        (self.call.lock().expect("native_fn.run(): failed to get callee"))(args)
    }
}

impl Serialize for NativeFnValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("NativeFn", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("kind", &self.kind())?;
        state.end()
    }
}

impl fmt::Debug for NativeFnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFnValue")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl RuntimeValue for NativeFnValue {
    fn kind(&self) -> ValueType {
        self.kind
    }

    fn into_any(&self) -> Box<dyn std::any::Any> {
        Box::new(dyn_clone::clone(self))
    }
}
