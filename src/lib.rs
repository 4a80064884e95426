mod builtin;
mod macros;
mod runtime;
mod values;

pub use builtin::*;
pub use runtime::*;
pub use values::*;
