//! An arena plus the options to parse and evaluate against it.

use super::{Error, Options};
use crate::arena::{Arena, ArenaUsage};
use crate::evaluator::Evaluator;
use crate::parser;
use crate::term::Term;
use crate::values::{Env, Value};

/// Owns the [`Arena`] for a run.
///
/// Every term and value handed out borrows the interpreter, and all of them
/// are released together when it is dropped. Running several programs on one
/// interpreter draws them all from the same pools.
pub struct Interpreter {
    arena: Arena,
    options: Options,
}

/// A parsed program and the value it evaluated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub term: &'a Term<'a>,
    pub value: &'a Value<'a>,
}

impl Interpreter {
    pub fn new(options: Options) -> Self {
        Self {
            arena: Arena::new(options.arena.clone()),
            options,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn usage(&self) -> ArenaUsage {
        self.arena.usage()
    }

    /// Parse `source` as exactly one term.
    pub fn parse<'a>(&'a self, source: &str) -> Result<&'a Term<'a>, Error> {
        Ok(parser::parse_complete(
            &self.arena,
            source,
            self.options.max_parse_depth,
        )?)
    }

    /// Evaluate a term under the empty environment.
    pub fn eval<'a>(&'a self, term: &'a Term<'a>) -> Result<&'a Value<'a>, Error> {
        let mut evaluator = Evaluator::new(self.options.evaluator.clone(), &self.arena);
        Ok(evaluator.eval(term, Env::empty())?)
    }

    /// Parse then evaluate. Parsing completes before any evaluation starts.
    pub fn run<'a>(&'a self, source: &str) -> Result<Run<'a>, Error> {
        let term = self.parse(source)?;
        let value = self.eval(term)?;
        Ok(Run { term, value })
    }
}
