#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core of the `debruijn` interpreter: a call-by-value evaluator for the
//! untyped lambda calculus with integers, addition and conditionals.
//!
//! Variables are de Bruijn indices. Terms, values and environment cells all
//! live in an [`Arena`](arena::Arena) made of three fixed-capacity pools, and
//! everything is released together when the arena is dropped.
//!
//! ```
//! use debruijn_core::{arena::Arena, evaluator, parser, values::Env};
//!
//! let arena = Arena::default();
//! let term = parser::parse(&arena, "@ \\ + $0 1 41").unwrap();
//! let value = evaluator::eval(&arena, term, Env::empty()).unwrap();
//! assert_eq!(value.as_number(), Some(42));
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
pub(crate) use alloc::string::{String, ToString};

pub mod api;
pub mod arena;
pub mod evaluator;
pub mod parser;
pub mod term;
pub mod values;
