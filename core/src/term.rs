//! Term model: the syntax tree built by the parser and walked by the evaluator.

use core::fmt;

/// A lambda term with de Bruijn indexed variables.
///
/// Children are arena references and every node has exactly one parent.
/// Equality is structural: two terms are equal when they have the same
/// shape and the same literals, wherever they were allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term<'a> {
    /// Variable, counting binders from the innermost abstraction outward.
    Var(usize),

    /// Integer literal.
    Num(i64),

    /// Application of a function to one argument.
    App(&'a Term<'a>, &'a Term<'a>),

    /// Single-parameter abstraction. The parameter is `Var(0)` in the body.
    Lam(&'a Term<'a>),

    /// Integer addition.
    Add(&'a Term<'a>, &'a Term<'a>),

    /// Conditional on a number: nonzero selects `then_branch`.
    If {
        cond: &'a Term<'a>,
        then_branch: &'a Term<'a>,
        else_branch: &'a Term<'a>,
    },
}

impl Term<'_> {
    /// Number of nodes in the tree rooted at this term.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) | Term::Num(_) => 1,
            Term::Lam(body) => 1 + body.size(),
            Term::App(l, r) | Term::Add(l, r) => 1 + l.size() + r.size(),
            Term::If {
                cond,
                then_branch,
                else_branch,
            } => 1 + cond.size() + then_branch.size() + else_branch.size(),
        }
    }
}

/// Renders the canonical prefix form accepted by the parser.
impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(index) => write!(f, "${}", index),
            Term::Num(value) => write!(f, "{}", value),
            Term::App(fun, arg) => write!(f, "@ {} {}", fun, arg),
            Term::Lam(body) => write!(f, "\\ {}", body),
            Term::Add(left, right) => write!(f, "+ {} {}", left, right),
            Term::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "? {} {} {}", cond, then_branch, else_branch),
        }
    }
}
