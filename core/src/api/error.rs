//! Public error type for a whole run.
//!
//! Parser and evaluator errors stay distinct types internally; drivers see
//! one [`Error`] and decide what to do with it.

use crate::arena::{AllocError, PoolKind};
use crate::evaluator::EvalError;
use crate::parser::{ParseError, ParseErrorKind, Span};
use crate::{String, ToString};
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// The fatal conditions a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A pool ran out of capacity.
    AllocationExhausted(PoolKind),
    /// Malformed program text.
    Syntax,
    /// De Bruijn index beyond the bindings in scope.
    UnboundVariable,
    /// Operand of the wrong shape.
    TypeMismatch,
    /// A nesting limit was hit.
    DepthExceeded,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::AllocationExhausted(_) => write!(f, "allocation exhausted"),
            Category::Syntax => write!(f, "syntax error"),
            Category::UnboundVariable => write!(f, "unbound variable"),
            Category::TypeMismatch => write!(f, "type mismatch"),
            Category::DepthExceeded => write!(f, "depth exceeded"),
        }
    }
}

/// What a renderer needs to report an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Location in the program text, for errors found while parsing.
    pub span: Option<Span>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Short error code (e.g., "P001").
    pub code: String,
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::Parse(e) => match e.kind {
                ParseErrorKind::Alloc(AllocError { pool, .. }) => {
                    Category::AllocationExhausted(pool)
                }
                ParseErrorKind::MaxDepthExceeded { .. } => Category::DepthExceeded,
                _ => Category::Syntax,
            },
            Error::Eval(e) => match e {
                EvalError::UnboundVariable { .. } => Category::UnboundVariable,
                EvalError::TypeMismatch { .. } => Category::TypeMismatch,
                EvalError::DepthExceeded { .. } => Category::DepthExceeded,
                EvalError::Alloc(AllocError { pool, .. }) => Category::AllocationExhausted(*pool),
            },
        }
    }

    /// Convert to a [`Diagnostic`] for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(e) => Diagnostic {
                message: e.kind.to_string(),
                span: Some(e.span.clone()),
                help: e.help().map(|h| h.to_string()),
                code: e.code().to_string(),
            },
            Error::Eval(e) => Diagnostic {
                message: e.to_string(),
                span: None,
                help: match e {
                    EvalError::Alloc(_) => Some("raise the pool capacity".to_string()),
                    EvalError::DepthExceeded { .. } => {
                        Some("raise the depth limit or check for non-termination".to_string())
                    }
                    _ => None,
                },
                code: match e {
                    EvalError::UnboundVariable { .. } => "E001",
                    EvalError::TypeMismatch { .. } => "E002",
                    EvalError::DepthExceeded { .. } => "E003",
                    EvalError::Alloc(_) => "A001",
                }
                .to_string(),
            },
        }
    }
}
