//! Unit tests for the evaluator.

use super::*;
use crate::{
    arena::{AllocError, ArenaOptions, PoolKind},
    parser,
    values::ValueKind,
};
use pretty_assertions::assert_eq;

struct Runner {
    arena: Arena,
}

impl Runner {
    fn new() -> Self {
        Self {
            arena: Arena::default(),
        }
    }

    fn with_arena(options: ArenaOptions) -> Self {
        Self {
            arena: Arena::new(options),
        }
    }

    fn parse(&self, input: &str) -> &Term<'_> {
        parser::parse_complete(&self.arena, input, parser::DEFAULT_MAX_DEPTH)
            .expect("parsing failed")
    }

    fn run(&self, input: &str) -> Result<&Value<'_>, EvalError> {
        let term = self.parse(input);
        eval(&self.arena, term, Env::empty())
    }

    fn run_in<'a>(&'a self, input: &str, env: &'a Env<'a>) -> Result<&'a Value<'a>, EvalError> {
        let term = self.parse(input);
        eval(&self.arena, term, env)
    }

    fn run_with_limits(&self, input: &str, max_depth: usize) -> Result<&Value<'_>, EvalError> {
        let term = self.parse(input);
        eval_with_options(
            &self.arena,
            term,
            Env::empty(),
            EvaluatorOptions { max_depth },
        )
    }

    fn number(&self, input: &str) -> i64 {
        let value = self.run(input).expect("evaluation failed");
        value
            .as_number()
            .unwrap_or_else(|| panic!("expected a number, got {}", value))
    }

    /// Environment whose index 0 is the last element of `numbers`.
    fn env(&self, numbers: &[i64]) -> &Env<'_> {
        numbers.iter().fold(Env::empty(), |env, &n| {
            let value = Value::number(&self.arena, n).unwrap();
            Env::cons(&self.arena, value, env).unwrap()
        })
    }
}

// ============================================================================
// Atoms and arithmetic
// ============================================================================

#[test]
fn test_number_literal() {
    let runner = Runner::new();
    assert_eq!(runner.number("42"), 42);
    assert_eq!(runner.number("-7"), -7);
}

#[test]
fn test_addition() {
    let runner = Runner::new();
    assert_eq!(runner.number("+ 2 3"), 5);
    assert_eq!(runner.number("+ -2 3"), 1);
    assert_eq!(runner.number("+ -2 -3"), -5);
    assert_eq!(runner.number("+ + 1 2 + 3 4"), 10);
}

#[test]
fn test_addition_grid() {
    let runner = Runner::new();
    for a in [-1000, -1, 0, 1, 999] {
        for b in [-5, 0, 7, 123456] {
            let source = format!("+ {} {}", a, b);
            assert_eq!(runner.number(&source), a + b, "{}", source);
        }
    }
}

#[test]
fn test_addition_wraps() {
    let runner = Runner::new();
    assert_eq!(runner.number("+ 9223372036854775807 1"), i64::MIN);
    assert_eq!(runner.number("+ -9223372036854775808 -1"), i64::MAX);
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variable_lookup() {
    let runner = Runner::new();
    let env = runner.env(&[10, 20, 30]);
    for (index, expected) in [(0, 30), (1, 20), (2, 10)] {
        let value = runner.run_in(&format!("${}", index), env).unwrap();
        assert_eq!(value.as_number(), Some(expected));
    }
}

#[test]
fn test_variable_returns_bound_value_itself() {
    let runner = Runner::new();
    let env = runner.env(&[5]);
    let value = runner.run_in("$0", env).unwrap();
    assert!(core::ptr::eq(value, env.lookup(0).unwrap()));
}

#[test]
fn test_unbound_variable() {
    let runner = Runner::new();
    assert_eq!(
        runner.run("$0"),
        Err(EvalError::UnboundVariable {
            index: 0,
            available: 0
        })
    );

    let env = runner.env(&[1, 2]);
    assert_eq!(
        runner.run_in("$2", env),
        Err(EvalError::UnboundVariable {
            index: 2,
            available: 2
        })
    );
}

#[test]
fn test_unbound_under_binder() {
    // One binder in scope, index 1 escapes it
    let runner = Runner::new();
    assert_eq!(
        runner.run("@ \\ $1 5"),
        Err(EvalError::UnboundVariable {
            index: 1,
            available: 1
        })
    );
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_conditional() {
    let runner = Runner::new();
    assert_eq!(runner.number("? 0 1 2"), 2);
    assert_eq!(runner.number("? 1 1 2"), 1);
    assert_eq!(runner.number("? -1 1 2"), 1);
    assert_eq!(runner.number("? + 1 -1 10 20"), 20);
}

#[test]
fn test_conditional_short_circuits() {
    let runner = Runner::new();
    // The untaken branch would fail with an unbound variable
    assert_eq!(runner.number("? 0 $5 2"), 2);
    assert_eq!(runner.number("? 1 3 $5"), 3);
    // ... or with a type mismatch
    assert_eq!(runner.number("? 0 @ 1 2 9"), 9);
}

#[test]
fn test_untaken_branch_allocates_nothing() {
    let runner = Runner::new();
    runner.number("? 0 + 1 2 7");
    // Condition and the selected branch only
    assert_eq!(runner.arena.usage().values.allocated, 2);
}

// ============================================================================
// Abstraction and application
// ============================================================================

#[test]
fn test_identity() {
    let runner = Runner::new();
    assert_eq!(runner.number("@ \\ $0 4"), 4);
}

#[test]
fn test_abstraction_is_closure() {
    let runner = Runner::new();
    let value = runner.run("\\ + $0 1").unwrap();
    assert_eq!(value.kind(), ValueKind::Closure);
    assert_eq!(value.to_string(), "\\ + $0 1[");
}

#[test]
fn test_curried_application() {
    let runner = Runner::new();
    // (\x. \y. x + y) 3 4
    assert_eq!(runner.number("@ @ \\ \\ + $1 $0 3 4"), 7);
    // (\x. \y. x) 1 2
    assert_eq!(runner.number("@ @ \\ \\ $1 1 2"), 1);
}

#[test]
fn test_closure_captures_extended_environment() {
    let runner = Runner::new();
    // Applying \ \ $1 to 8 under E = [5] gives a closure over [8, 5]
    let env = runner.env(&[5]);
    let value = runner.run_in("@ \\ \\ $1 8", env).unwrap();
    let Value::Closure { body, env: captured } = value else {
        panic!("expected a closure, got {}", value);
    };
    assert_eq!(**body, Term::Var(1));
    let numbers: Vec<i64> = captured.iter().filter_map(|v| v.as_number()).collect();
    assert_eq!(numbers, vec![8, 5]);
    // The tail is E itself, not a copy
    let Env::Cons { tail, .. } = captured else {
        panic!("captured environment is empty");
    };
    assert!(core::ptr::eq(*tail, env));
}

#[test]
fn test_lexical_scope_not_dynamic() {
    let runner = Runner::new();
    // let k = (\x. \y. x) 1 in (\z. k 99) 2
    // k must see x = 1 from its definition, not z = 2 from the call site
    assert_eq!(runner.number("@ \\ @ \\ @ $1 99 2 @ \\ \\ $1 1"), 1);
}

#[test]
fn test_argument_evaluated_after_function() {
    let runner = Runner::new();
    // Both operands fail; the function's error wins
    assert_eq!(
        runner.run("@ $3 $4"),
        Err(EvalError::UnboundVariable {
            index: 3,
            available: 0
        })
    );
}

#[test]
fn test_call_by_value() {
    let runner = Runner::new();
    // The argument fails even though the body ignores it
    assert!(runner.run("@ \\ 1 $9").is_err());
}

#[test]
fn test_fixed_point_recursion() {
    crate::test_utils::init_test_logging();
    let runner = Runner::new();
    // Z combinator applied to sum n m = if n then m + sum (n - 1) m else 0
    let source = "@ @ @ \\ @ \\ @ $1 \\ @ @ $1 $1 $0 \\ @ $1 \\ @ @ $1 $1 $0 \\ \\ \\ ? $1 + $0 @ @ $2 + $1 -1 $0 0 25 4";
    assert_eq!(runner.number(source), 100);
}

// ============================================================================
// Type mismatches
// ============================================================================

#[test]
fn test_type_mismatch_add() {
    let runner = Runner::new();
    let expected = EvalError::TypeMismatch {
        operation: Operation::Add,
        expected: ValueKind::Number,
        found: ValueKind::Closure,
    };
    assert_eq!(runner.run("+ \\ $0 1"), Err(expected.clone()));
    assert_eq!(runner.run("+ 1 \\ $0"), Err(expected));
}

#[test]
fn test_type_mismatch_if_condition() {
    let runner = Runner::new();
    assert_eq!(
        runner.run("? \\ $0 1 2"),
        Err(EvalError::TypeMismatch {
            operation: Operation::IfCondition,
            expected: ValueKind::Number,
            found: ValueKind::Closure,
        })
    );
}

#[test]
fn test_type_mismatch_app_function() {
    let runner = Runner::new();
    assert_eq!(
        runner.run("@ 3 4"),
        Err(EvalError::TypeMismatch {
            operation: Operation::AppFunction,
            expected: ValueKind::Closure,
            found: ValueKind::Number,
        })
    );
}

#[test]
fn test_error_messages() {
    let runner = Runner::new();
    assert_eq!(
        runner.run("@ 3 4").unwrap_err().to_string(),
        "type mismatch in application: expected a closure, found a number"
    );
    assert_eq!(
        runner.run("$2").unwrap_err().to_string(),
        "unbound variable $2: 0 binding(s) in scope"
    );
}

// ============================================================================
// Resource limits
// ============================================================================

#[test]
fn test_depth_exceeded() {
    let runner = Runner::new();
    // (\x. x x) (\x. x x) never terminates
    let err = runner.run_with_limits("@ \\ @ $0 $0 \\ @ $0 $0", 200).unwrap_err();
    assert_eq!(err, EvalError::DepthExceeded { max_depth: 200 });
    assert!(err.is_resource_exceeded());
}

#[test]
fn test_depth_limit_is_exact() {
    let runner = Runner::new();
    // `+ 1 2` needs two levels: the addition and its operands
    assert!(runner.run_with_limits("+ 1 2", 2).is_ok());
    assert_eq!(
        runner.run_with_limits("+ 1 2", 1),
        Err(EvalError::DepthExceeded { max_depth: 1 })
    );
}

#[test]
fn test_value_pool_exhaustion() {
    let runner = Runner::with_arena(ArenaOptions {
        max_values: 2,
        ..ArenaOptions::default()
    });
    let err = runner.run("+ 1 2").unwrap_err();
    match &err {
        EvalError::Alloc(alloc) => assert_eq!(alloc.pool, PoolKind::Values),
        other => panic!("expected allocation failure, got {:?}", other),
    }
    assert!(err.is_resource_exceeded());
}

#[test]
fn test_env_pool_exhaustion() {
    let runner = Runner::with_arena(ArenaOptions {
        max_env_cells: 1,
        ..ArenaOptions::default()
    });
    assert_eq!(runner.number("@ \\ $0 1"), 1);
    let err = runner.run("@ \\ $0 1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::Alloc(AllocError {
            pool: PoolKind::EnvCells,
            ..
        })
    ));
}

#[test]
fn test_evaluator_reusable_after_error() {
    let runner = Runner::new();
    let mut evaluator = Evaluator::new(EvaluatorOptions::default(), &runner.arena);
    let bad = runner.parse("+ 1 $0");
    let good = runner.parse("+ 1 2");
    assert!(evaluator.eval(bad, Env::empty()).is_err());
    assert_eq!(
        evaluator.eval(good, Env::empty()).unwrap().as_number(),
        Some(3)
    );
}
