use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{cast_value, macros::bail, DispatchError, Invokable};

use super::{NativeFnValue, RuntimeValue, Value, ValueType};

pub type Key = String;

/// A "present" collaborator: operation names map to concrete handlers.
/// Unlike the null object, it rejects names it has no handler for.
#[derive(Debug, Clone)]
pub struct ObjectValue {
    kind: ValueType,
    map: HashMap<Key, Value>,
}

impl RuntimeValue for ObjectValue {
    fn kind(&self) -> ValueType {
        self.kind
    }

    fn into_any(&self) -> Box<dyn std::any::Any> {
        Box::new(dyn_clone::clone(self))
    }
}

impl From<HashMap<Key, Value>> for ObjectValue {
    fn from(map: HashMap<Key, Value>) -> Self {
        Self {
            kind: ValueType::Object,
            map,
        }
    }
}

impl ObjectValue {
    pub fn map(&self) -> HashMap<Key, Value> {
        self.map.clone()
    }

    pub fn get_property(&self, key: Key) -> Option<Value> {
        if let Some(property) = self.map.get(&key) {
            let value = property
                .lock()
                .expect("object.get_property(): failed to get property value");
            return Some(Arc::new(Mutex::new(dyn_clone::clone_box(&**value))));
        }
        None
    }

    pub fn set_property(&mut self, key: Key, value: Value) {
        self.map.insert(key, value);
    }
}

impl Invokable for ObjectValue {
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, DispatchError> {
        let handler = match self.get_property(name.to_string()) {
            Some(handler) => handler,
            None => bail!(DispatchError::UnknownOperation(name.to_string())),
        };

        let handler = handler
            .lock()
            .expect("object.invoke(): failed to get handler");
        if handler.kind() != ValueType::NativeFn {
            bail!(DispatchError::InvalidHandler(name.to_string()))
        }

        let native = cast_value::<NativeFnValue>(&handler).unwrap();
        Ok(native.run(args))
    }
}
