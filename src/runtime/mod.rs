mod dispatch;
mod error;

pub use dispatch::*;
pub use error::*;
