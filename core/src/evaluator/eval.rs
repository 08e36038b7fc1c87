//! Core evaluation logic.

use crate::{
    arena::Arena,
    evaluator::{EvalError, EvaluatorOptions, Operation},
    term::Term,
    values::{Env, Value, ValueKind},
};

/// Evaluator for terms.
///
/// Holds no state between calls besides the recursion depth, which is back
/// to zero after every top-level [`eval`](Evaluator::eval).
pub struct Evaluator<'a> {
    options: EvaluatorOptions,
    arena: &'a Arena,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(options: EvaluatorOptions, arena: &'a Arena) -> Self {
        Self {
            options,
            arena,
            depth: 0,
        }
    }

    /// Evaluate a term under an environment.
    pub fn eval(
        &mut self,
        term: &'a Term<'a>,
        env: &'a Env<'a>,
    ) -> Result<&'a Value<'a>, EvalError> {
        let top_level = self.depth == 0;
        let result = self.eval_term(term, env);
        if top_level {
            match &result {
                Ok(value) => {
                    tracing::debug!(kind = ?value.kind(), usage = %self.arena.usage(), "Evaluated term")
                }
                Err(e) => tracing::debug!(error = %e, "Evaluation failed"),
            }
        }
        result
    }

    fn eval_term(
        &mut self,
        term: &'a Term<'a>,
        env: &'a Env<'a>,
    ) -> Result<&'a Value<'a>, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(EvalError::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_term_inner(term, env);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_term_inner(
        &mut self,
        term: &'a Term<'a>,
        env: &'a Env<'a>,
    ) -> Result<&'a Value<'a>, EvalError> {
        match term {
            Term::Var(index) => env.lookup(*index),

            Term::Num(n) => Ok(Value::number(self.arena, *n)?),

            Term::Add(left, right) => {
                let left = self.eval_number(left, env, Operation::Add)?;
                let right = self.eval_number(right, env, Operation::Add)?;
                Ok(Value::number(self.arena, left.wrapping_add(right))?)
            }

            Term::If {
                cond,
                then_branch,
                else_branch,
            } => {
                // Only the selected branch is evaluated
                if self.eval_number(cond, env, Operation::IfCondition)? != 0 {
                    self.eval_term(then_branch, env)
                } else {
                    self.eval_term(else_branch, env)
                }
            }

            Term::Lam(body) => Ok(Value::closure(self.arena, body, env)?),

            Term::App(fun, arg) => {
                let (body, captured) = match self.eval_term(fun, env)? {
                    Value::Closure { body, env } => (*body, *env),
                    other => {
                        return Err(EvalError::TypeMismatch {
                            operation: Operation::AppFunction,
                            expected: ValueKind::Closure,
                            found: other.kind(),
                        });
                    }
                };
                let arg = self.eval_term(arg, env)?;
                let extended = Env::cons(self.arena, arg, captured)?;
                tracing::trace!(depth = self.depth, bindings = extended.len(), "Applying closure");
                self.eval_term(body, extended)
            }
        }
    }

    fn eval_number(
        &mut self,
        term: &'a Term<'a>,
        env: &'a Env<'a>,
        operation: Operation,
    ) -> Result<i64, EvalError> {
        let value = self.eval_term(term, env)?;
        value.as_number().ok_or(EvalError::TypeMismatch {
            operation,
            expected: ValueKind::Number,
            found: value.kind(),
        })
    }
}
