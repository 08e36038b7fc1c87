//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Program errors**: the term itself is wrong at run time: an unbound
//!   variable or an operand of the wrong shape.
//!
//! - **Resource errors**: the run is well formed but needs more than it was
//!   given: a pool ran out or evaluation nested too deeply.

use core::fmt;

use crate::arena::AllocError;
use crate::values::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// De Bruijn index beyond the bindings in scope.
    #[error("unbound variable ${index}: {available} binding(s) in scope")]
    UnboundVariable { index: usize, available: usize },

    /// Operand of the wrong shape.
    #[error("type mismatch in {operation}: expected {expected}, found {found}")]
    TypeMismatch {
        operation: Operation,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Evaluation recursion depth exceeded.
    #[error("evaluation depth exceeds maximum of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// The value or environment pool ran out.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

impl EvalError {
    /// True for errors caused by limits rather than by the program.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, EvalError::DepthExceeded { .. } | EvalError::Alloc(_))
    }
}

/// Where a type mismatch happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Either operand of `+`.
    Add,
    /// Condition of `?`.
    IfCondition,
    /// Function position of `@`.
    AppFunction,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::IfCondition => write!(f, "conditional"),
            Operation::AppFunction => write!(f, "application"),
        }
    }
}
