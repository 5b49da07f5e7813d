use std::ops::ControlFlow;

use logos::Logos;
use tracing::{debug, warn};

use crate::{
    error::LineError,
    interpreter::{lexer::Token, state::LineState},
};

/// Result type used by the evaluator.
///
/// Every line either succeeds or fails with a `LineError` that describes why
/// the line was discarded.
pub type EvalResult<T> = Result<T, LineError>;

/// Evaluates fully parenthesized expressions line by line.
///
/// ## Usage
///
/// An `Evaluator` is created once per input and fed its lines in order. It
/// keeps the running line number for diagnostics; the [`LineState`] is
/// cleared after every line, so a failing line never affects the next one.
///
/// ```
/// use parenval::interpreter::evaluator::core::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.eval_line("((2*3)+4)").unwrap(), Some(10.0));
/// assert!(evaluator.eval_line("(3+4").is_err());
/// assert_eq!(evaluator.eval_line("(10/2)").unwrap(), Some(5.0));
/// assert_eq!(evaluator.line(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    state: LineState,
    line:  usize,
}

impl Evaluator {
    /// Creates an evaluator positioned before the first line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines evaluated so far, which is also the 1-based number of
    /// the most recent line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The per-line state. Empty between calls to [`Self::eval_line`].
    #[must_use]
    pub const fn state(&self) -> &LineState {
        &self.state
    }

    /// Evaluates one line of input, given without its line terminator.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the line held an expression.
    /// - `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    /// Returns the first [`LineError`] found on the line. The rest of the line
    /// is not looked at.
    pub fn eval_line(&mut self, text: &str) -> EvalResult<Option<f64>> {
        self.line += 1;
        let result = self.process_line(text);
        self.state.reset();

        match &result {
            Ok(Some(value)) => debug!(line = self.line, value, "line evaluated"),
            Ok(None) => debug!(line = self.line, "no expression on line"),
            Err(e) => debug!(line = self.line, error = %e, "line discarded"),
        }
        result
    }

    fn process_line(&mut self, text: &str) -> EvalResult<Option<f64>> {
        let mut lexer = Token::lexer(text);

        while let Some(token) = lexer.next() {
            let Ok(token) = token else {
                let found = text[lexer.span().start..].chars().next().unwrap_or_default();
                return Err(LineError::NonNumericCharacter { found: found.to_string(),
                                                            line:  self.line, });
            };
            if self.step(token)?.is_break() {
                return Ok(None);
            }
        }

        self.end_of_line()
    }

    /// Advances the state machine by one token.
    ///
    /// Breaks when the rest of the line is to be ignored.
    fn step(&mut self, token: Token) -> EvalResult<ControlFlow<()>> {
        let line = self.line;
        let state = &mut self.state;

        match token {
            Token::Hash => return Ok(ControlFlow::Break(())),
            Token::LParen => {
                state.flush_number(line)?;
                state.depth += 1;
            },
            Token::Operator(op) => {
                state.flush_number(line)?;
                // Un-bracketed chains such as `1+2+3` reduce left to right.
                if state.top_operator_is_local() {
                    state.apply_operator(line)?;
                }
                state.push_operator(op);
            },
            Token::RParen => {
                state.flush_number(line)?;
                if state.top_operator_is_local() {
                    state.apply_operator(line)?;
                }
                state.depth -= 1;
                if state.depth < 0 {
                    return Err(LineError::UnbalancedBrackets { line });
                }
            },
            Token::Dot => state.push_char('.'),
            Token::Digit(digit) => state.push_char(digit),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Produces the result of a line once its last character has been read.
    fn end_of_line(&mut self) -> EvalResult<Option<f64>> {
        let line = self.line;
        let state = &mut self.state;

        if state.depth != 0 {
            return Err(LineError::UnbalancedBrackets { line });
        }
        state.flush_number(line)?;
        while !state.operators.is_empty() {
            state.apply_operator(line)?;
        }

        let result = state.values.pop();
        if !state.values.is_empty() {
            warn!(line, discarded = state.values.len(), "operands without operator discarded");
        }
        Ok(result)
    }
}
