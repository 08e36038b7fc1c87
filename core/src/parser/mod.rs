//! Parser for the prefix-notation term syntax.
//!
//! The parser allocates every node from the term pool of an [`Arena`]
//! (`crate::arena::Arena`), so running out of term capacity is reported as a
//! [`ParseError`] before any evaluation happens.

pub mod error;
pub mod parser;
mod syntax;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse, parse_complete, parse_with_max_depth};
pub use syntax::Span;
