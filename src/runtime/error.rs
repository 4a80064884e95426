use crate::{stringify, values::RuntimeValue};

#[derive(Debug)]
pub enum DispatchError {
    UnknownOperation(String),
    InvalidHandler(String),
    NotInvokable(Box<dyn RuntimeValue>),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownOperation(operation_name) => {
                write!(
                    f,
                    "Cannot invoke \"{operation_name}\" as no handler is mapped for it"
                )
            }
            DispatchError::InvalidHandler(operation_name) => {
                write!(
                    f,
                    "Handler mapped for \"{operation_name}\" is not callable"
                )
            }
            DispatchError::NotInvokable(value) => {
                write!(
                    f,
                    "This value cannot receive operations: {:?}",
                    stringify(dyn_clone::clone_box(&**value))
                )
            }
        }
    }
}
