//! debruijn - a call-by-value interpreter for the untyped lambda calculus
//!
//! # Overview
//!
//! Programs are written in a prefix notation where variables are de Bruijn
//! indices, so no term ever carries a name:
//!
//! | Syntax        | Meaning                              |
//! |---------------|--------------------------------------|
//! | `$n`          | variable bound `n` binders out       |
//! | `42`, `-7`    | integer literal                      |
//! | `@ f a`       | application                          |
//! | `\ b`         | abstraction                          |
//! | `+ a b`       | addition                             |
//! | `? c t e`     | `t` if `c` is nonzero, `e` otherwise |
//!
//! Operands are separated by exactly one space.
//!
//! # Quick Start
//!
//! ```
//! use debruijn::{Interpreter, Options};
//!
//! let interpreter = Interpreter::new(Options::default());
//! let run = interpreter.run("@ \\ + $0 1 41").unwrap();
//! assert_eq!(run.term.to_string(), "@ \\ + $0 1 41");
//! assert_eq!(run.value.as_number(), Some(42));
//! ```
//!
//! Errors carry enough context to be rendered against the program text,
//! see [`render_error`].

mod error_renderer;

pub use error_renderer::{
    format_error, render_error, render_error_to, render_error_to_string,
    render_error_to_string_no_color,
};

// Re-export public API from debruijn_core
pub use debruijn_core::api::{Category, Diagnostic, Error, Interpreter, Options, Run};

pub use debruijn_core::arena::{
    self, AllocError, Arena, ArenaOptions, ArenaUsage, PoolKind, PoolUsage,
};
pub use debruijn_core::evaluator::{self, EvalError, EvaluatorOptions, Operation};
pub use debruijn_core::parser::{self, ParseError, ParseErrorKind, Span};
pub use debruijn_core::term::Term;
pub use debruijn_core::values::{Env, Value, ValueKind};

/// Sums 1000 copies of 1000 through a strict fixed-point combinator.
///
/// Evaluates to `1000000`. The recursion is about a thousand calls deep, so
/// run it on a thread with a few megabytes of stack or more.
pub const DEMO_PROGRAM: &str = "@ @ @ \\ @ \\ @ $1 \\ @ @ $1 $1 $0 \\ @ $1 \\ @ @ $1 $1 $0 \\ \\ \\ ? $1 + $0 @ @ $2 + $1 -1 $0 0 1000 1000";
