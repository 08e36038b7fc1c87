//! Public API: parse and evaluate a program in one call.
//!
//! # Example
//!
//! ```
//! use debruijn_core::api::{Interpreter, Options};
//!
//! let interpreter = Interpreter::new(Options::default());
//! let run = interpreter.run("+ 2 3").unwrap();
//! assert_eq!(run.term.to_string(), "+ 2 3");
//! assert_eq!(run.value.to_string(), "5");
//! ```

pub mod error;
pub mod interpreter;
pub mod options;

pub use error::{Category, Diagnostic, Error};
pub use interpreter::{Interpreter, Run};
pub use options::Options;
