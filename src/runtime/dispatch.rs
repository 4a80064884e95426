use crate::{
    cast_value,
    macros::bail,
    values::{NullValue, ObjectValue, RuntimeValue, Value, ValueType},
};

use super::error::DispatchError;

/// Generic named-operation entry point. Collaborators call this instead of
/// statically-known methods, which keeps the set of operation names open:
/// a name only has to exist at the call site, not in any interface.
pub trait Invokable {
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, DispatchError>;
}

/// Catch-all dispatch over shared handles. A `Null` handle absorbs every
/// name; an `Object` handle resolves the name against its handler map;
/// anything else cannot receive operations at all.
impl Invokable for Value {
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, DispatchError> {
        let value = self.lock().expect("invoke(): failed to get value");
        match value.kind() {
            ValueType::Null => {
                let null = cast_value::<NullValue>(&value).unwrap();
                drop(value);
                null.invoke(name, args)
            }
            ValueType::Object => {
                let object = cast_value::<ObjectValue>(&value).unwrap();
                // Handlers run with the lock released so they may re-invoke
                // the handle they were reached through.
                drop(value);
                object.invoke(name, args)
            }
            _ => bail!(DispatchError::NotInvokable(dyn_clone::clone_box(&**value))),
        }
    }
}
