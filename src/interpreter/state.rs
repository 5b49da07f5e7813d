use crate::{
    error::LineError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator},
};

/// An operator waiting on the operator stack.
///
/// `depth` is the bracket depth at which the operator was read and identifies
/// the bracket group that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperator {
    /// The operator itself.
    pub op:    BinaryOperator,
    /// Bracket depth of the owning group.
    pub depth: i64,
}

/// Transient evaluation state of a single line.
///
/// Holds the value stack, the operator stack, the digits of the number being
/// read and the bracket depth. Both stacks grow and shrink at the end of their
/// `Vec`, so the last element is the top. The state is reset whenever a line
/// is finished, commented out or rejected.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineState {
    /// Operands not yet consumed by an operator.
    pub values:    Vec<f64>,
    /// Operators not yet applied.
    pub operators: Vec<PendingOperator>,
    /// Digits and decimal points of the number currently being read.
    pub number:    String,
    /// Number of unmatched `(` seen so far.
    pub depth:     i64,
}

impl LineState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing has been read since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
        && self.operators.is_empty()
        && self.number.is_empty()
        && self.depth == 0
    }

    /// Clears both stacks and the pending number and zeroes the depth.
    pub fn reset(&mut self) {
        self.values.clear();
        self.operators.clear();
        self.number.clear();
        self.depth = 0;
    }

    /// Appends a digit or decimal point to the pending number.
    pub fn push_char(&mut self, c: char) {
        self.number.push(c);
    }

    /// Converts the pending number into a value on the value stack.
    ///
    /// Does nothing if no number is pending.
    ///
    /// # Errors
    /// Returns [`LineError::InvalidLiteral`] if the buffered characters are not
    /// a number, such as a lone `.` or `1.2.3`.
    ///
    /// # Example
    /// ```
    /// use parenval::interpreter::state::LineState;
    ///
    /// let mut state = LineState::new();
    /// for c in "2.5".chars() {
    ///     state.push_char(c);
    /// }
    /// state.flush_number(1).unwrap();
    /// assert_eq!(state.values, vec![2.5]);
    /// assert!(state.number.is_empty());
    /// ```
    pub fn flush_number(&mut self, line: usize) -> EvalResult<()> {
        if self.number.is_empty() {
            return Ok(());
        }
        let value = self.number
                        .parse::<f64>()
                        .map_err(|_| LineError::InvalidLiteral { literal: self.number.clone(),
                                                                 line })?;
        self.values.push(value);
        self.number.clear();
        Ok(())
    }

    /// Returns `true` if the top operator belongs to the group at the current
    /// bracket depth.
    #[must_use]
    pub fn top_operator_is_local(&self) -> bool {
        self.operators.last().is_some_and(|pending| pending.depth == self.depth)
    }

    /// Pushes an operator owned by the group at the current bracket depth.
    pub fn push_operator(&mut self, op: BinaryOperator) {
        self.operators.push(PendingOperator { op, depth: self.depth });
    }

    /// Pops the top operator and its two operands and pushes the result.
    ///
    /// The operand on top of the value stack is the right-hand side.
    ///
    /// # Errors
    /// Returns [`LineError::StackUnderflow`] if fewer than two operands are
    /// available. The operator is consumed either way.
    ///
    /// # Example
    /// ```
    /// use parenval::interpreter::{operator::BinaryOperator, state::LineState};
    ///
    /// let mut state = LineState::new();
    /// state.values = vec![10.0, 4.0];
    /// state.push_operator(BinaryOperator::Sub);
    /// state.apply_operator(1).unwrap();
    /// assert_eq!(state.values, vec![6.0]);
    /// ```
    pub fn apply_operator(&mut self, line: usize) -> EvalResult<()> {
        let Some(PendingOperator { op, .. }) = self.operators.pop() else {
            return Ok(());
        };
        let underflow = || LineError::StackUnderflow { operator: op.symbol(),
                                                       line };
        let right = self.values.pop().ok_or_else(underflow)?;
        let left = self.values.pop().ok_or_else(underflow)?;
        self.values.push(op.apply(left, right));
        Ok(())
    }
}
