use std::{
    any::Any,
    fmt::Debug,
    sync::{Arc, Mutex},
};

use dyn_clone::DynClone;
use serde::Serialize;

mod bool;
mod integer;
mod native_fn;
mod null;
mod object;
mod string;

pub use bool::*;
pub use integer::*;
pub use native_fn::*;
pub use null::*;
pub use object::*;
pub use string::*;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum ValueType {
    Null,
    Boolean,
    Integer,
    String,
    NativeFn,
    Object,
}

/// Shared handle every dispatch path operates on.
pub type Value = Arc<Mutex<Box<dyn RuntimeValue>>>;

pub trait RuntimeValue: DynClone + Debug + Send + Sync {
    fn kind(&self) -> ValueType;
    fn into_any(&self) -> Box<dyn Any>;
}
