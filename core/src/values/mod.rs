//! Runtime values and the environments they close over.

mod env;
mod value;

pub use env::{Env, EnvIter};
pub use value::{Value, ValueKind};
