use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{Key, NullValue, ObjectValue, Value};

use super::{mk_native_fn, mk_runtime_value, stringify};

pub fn native_print_function(args: Vec<Value>) -> Value {
    println!(
        "{}",
        args.into_iter()
            .map(|arg| {
                let val = arg.lock().unwrap();
                let cloned = dyn_clone::clone_box(&**val);
                stringify(cloned)
            })
            .collect::<Vec<String>>()
            .join(" ")
    );
    NullValue::obtain()
}

/// A concrete collaborator with a `log` operation. Call sites written
/// against it keep working unchanged when `NullValue::obtain()` is
/// substituted for it.
pub fn console_object() -> Value {
    let mut map: HashMap<Key, Value> = HashMap::new();
    map.insert(
        "log".to_string(),
        mk_native_fn(
            "console.log".to_string(),
            Arc::new(Mutex::new(native_print_function)),
        ),
    );
    mk_runtime_value(Box::new(ObjectValue::from(map)))
}
