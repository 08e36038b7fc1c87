use core::fmt;

use crate::arena::{AllocError, Arena};
use crate::evaluator::EvalError;
use crate::values::Value;

/// Persistent list of bound values; index 0 is the most recent binding.
///
/// Cells are immutable and may be shared by any number of closures, so two
/// environments built on the same tail share it rather than copying it.
/// There is no way to modify a cell after it is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env<'a> {
    /// No bindings.
    Empty,
    Cons {
        head: &'a Value<'a>,
        tail: &'a Env<'a>,
    },
}

impl<'a> Env<'a> {
    /// The environment with no bindings. Needs no allocation.
    pub fn empty() -> &'a Env<'a> {
        &Env::Empty
    }

    /// Allocate a cell binding `head` in front of `tail`.
    pub fn cons(
        arena: &'a Arena,
        head: &'a Value<'a>,
        tail: &'a Env<'a>,
    ) -> Result<&'a Env<'a>, AllocError> {
        arena.alloc_env(Env::Cons { head, tail })
    }

    /// The value bound at de Bruijn `index`, walking `index` cells.
    pub fn lookup(&self, index: usize) -> Result<&'a Value<'a>, EvalError> {
        self.iter()
            .nth(index)
            .ok_or_else(|| EvalError::UnboundVariable {
                index,
                available: self.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Env::Empty)
    }

    /// Bound values, most recent first.
    pub fn iter(&self) -> EnvIter<'a> {
        EnvIter { next: *self }
    }
}

pub struct EnvIter<'a> {
    next: Env<'a>,
}

impl<'a> Iterator for EnvIter<'a> {
    type Item = &'a Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Env::Empty => None,
            Env::Cons { head, tail } => {
                self.next = *tail;
                Some(head)
            }
        }
    }
}

/// Each value followed by `, `, most recent first.
impl fmt::Display for Env<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{}, ", value)?;
        }
        Ok(())
    }
}
