//! Property-based tests for the line evaluator.

use parenval::{error::LineError, interpreter::evaluator::core::Evaluator};
use proptest::prelude::*;

/// A fully parenthesized expression with its source text and expected value.
#[derive(Debug, Clone)]
struct Expression {
    source: String,
    value:  f64,
}

/// Generate non-negative integer literals.
fn literal_strategy() -> impl Strategy<Value = Expression> {
    (0u32..100).prop_map(|n| Expression { source: n.to_string(),
                                          value:  f64::from(n), })
}

/// Generate fully parenthesized expressions of bounded depth. The expected
/// value is folded with the same `f64` operations in the same order.
fn expression_strategy() -> impl Strategy<Value = Expression> {
    literal_strategy().prop_recursive(4, 32, 2, |inner| {
                          (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner)
                              .prop_map(|(left, op, right)| {
                                  let value = match op {
                                      '+' => left.value + right.value,
                                      '-' => left.value - right.value,
                                      _ => left.value * right.value,
                                  };
                                  Expression { source: format!("({}{op}{})",
                                                               left.source, right.source),
                                               value }
                              })
                      })
}

fn eval(source: &str) -> Result<Option<f64>, LineError> {
    Evaluator::new().eval_line(source)
}

proptest! {
    #[test]
    fn fully_parenthesized_expressions_evaluate_exactly(expr in expression_strategy()) {
        prop_assert_eq!(eval(&expr.source), Ok(Some(expr.value)));
    }

    #[test]
    fn extra_outer_brackets_do_not_change_the_result(expr in expression_strategy(),
                                                     extra in 1usize..5) {
        let wrapped = format!("{}{}{}", "(".repeat(extra), expr.source, ")".repeat(extra));
        prop_assert_eq!(eval(&wrapped), eval(&expr.source));
    }

    #[test]
    fn missing_closing_brackets_are_reported(expr in expression_strategy(), extra in 1usize..5) {
        let source = format!("{}{}", "(".repeat(extra), expr.source);
        prop_assert_eq!(eval(&source), Err(LineError::UnbalancedBrackets { line: 1 }));
    }

    #[test]
    fn foreign_characters_are_reported(expr in expression_strategy(),
                                       foreign in "[a-zA-Z ,;%^]") {
        let source = format!("{}{foreign}", expr.source);
        let is_non_numeric = matches!(eval(&source), Err(LineError::NonNumericCharacter { .. }));
        prop_assert!(is_non_numeric);
    }

    #[test]
    fn state_is_clean_after_any_line(line in "[0-9.()+*/#a -]{0,24}") {
        let mut evaluator = Evaluator::new();
        let _ = evaluator.eval_line(&line);
        prop_assert!(evaluator.state().is_empty());
        prop_assert_eq!(evaluator.eval_line("((2*3)+4)"), Ok(Some(10.0)));
    }
}
