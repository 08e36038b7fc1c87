use core::fmt;

use crate::arena::{AllocError, Arena};
use crate::term::Term;
use crate::values::Env;

/// Result of evaluating a term.
///
/// Values are immutable once allocated. A closure borrows its body from the
/// term pool and its environment from the environment pool; it owns neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Num(i64),
    Closure {
        body: &'a Term<'a>,
        env: &'a Env<'a>,
    },
}

/// The shape of a value, used in type mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Closure,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "a number"),
            ValueKind::Closure => write!(f, "a closure"),
        }
    }
}

impl<'a> Value<'a> {
    /// Allocate a number.
    pub fn number(arena: &'a Arena, value: i64) -> Result<&'a Value<'a>, AllocError> {
        arena.alloc_value(Value::Num(value))
    }

    /// Allocate a closure capturing `env`.
    pub fn closure(
        arena: &'a Arena,
        body: &'a Term<'a>,
        env: &'a Env<'a>,
    ) -> Result<&'a Value<'a>, AllocError> {
        arena.alloc_value(Value::Closure { body, env })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Num(_) => ValueKind::Number,
            Value::Closure { .. } => ValueKind::Closure,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Closure { .. } => None,
        }
    }
}

/// Diagnostic rendering.
///
/// A closure prints as its body followed by `[` and the captured values,
/// each followed by `, `. The bracket is never closed; tools that read this
/// output rely on the exact format.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Closure { body, env } => write!(f, "\\ {}[{}", body, env),
        }
    }
}
