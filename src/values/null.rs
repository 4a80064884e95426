use std::{
    fmt,
    ops::{Add, Neg, Sub},
    sync::{Arc, Mutex},
};

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

use crate::{DispatchError, Invokable};

use super::{RuntimeValue, Value, ValueType};

lazy_static! {
    static ref CANONICAL: Value = Arc::new(Mutex::new(
        Box::new(NullValue::default()) as Box<dyn RuntimeValue>
    ));
}

/// The null object: absorbs any operation and coerces to the neutral
/// element of each value context.
#[derive(Debug, Clone, Copy)]
pub struct NullValue {
    kind: ValueType,
}

impl NullValue {
    /// Returns the canonical process-wide instance. Every call hands out
    /// the same allocation, so handles compare pointer-equal.
    pub fn obtain() -> Value {
        Arc::clone(&CANONICAL)
    }
}

impl RuntimeValue for NullValue {
    fn kind(&self) -> ValueType {
        self.kind
    }

    fn into_any(&self) -> Box<dyn std::any::Any> {
        Box::new(dyn_clone::clone(self))
    }
}

impl Default for NullValue {
    fn default() -> Self {
        Self {
            kind: ValueType::Null,
        }
    }
}

impl Invokable for NullValue {
    fn invoke(&self, _name: &str, _args: Vec<Value>) -> Result<Value, DispatchError> {
        Ok(NullValue::obtain())
    }
}

// Any two nulls are indistinguishable.
impl PartialEq for NullValue {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for NullValue {}

impl fmt::Display for NullValue {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Serialize for NullValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl From<NullValue> for bool {
    fn from(_: NullValue) -> Self {
        false
    }
}

impl From<NullValue> for isize {
    fn from(_: NullValue) -> Self {
        0
    }
}

impl From<NullValue> for String {
    fn from(_: NullValue) -> Self {
        String::new()
    }
}

impl Add<isize> for NullValue {
    type Output = isize;

    fn add(self, rhs: isize) -> isize {
        rhs
    }
}

impl Add<NullValue> for isize {
    type Output = isize;

    fn add(self, _rhs: NullValue) -> isize {
        self
    }
}

impl Sub<isize> for NullValue {
    type Output = isize;

    fn sub(self, rhs: isize) -> isize {
        -rhs
    }
}

impl Neg for NullValue {
    type Output = isize;

    fn neg(self) -> isize {
        0
    }
}
