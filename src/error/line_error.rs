use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that discard a single expression line.
pub enum LineError {
    /// The line ended with unmatched `(`, or a `)` had no matching `(`.
    #[error("Syntax error on line {line}: Unbalanced brackets.")]
    UnbalancedBrackets {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character outside of digits, `.`, operators, brackets and `#`.
    #[error("Error on line {line}: Non-numeric character '{found}' is not allowed.")]
    NonNumericCharacter {
        /// The offending character.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The accumulated digits and decimal points do not form a number.
    #[error("Error on line {line}: Invalid number literal '{literal}'.")]
    InvalidLiteral {
        /// The rejected literal, e.g. `.` or `1.2.3`.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator was applied with fewer than two operands available.
    #[error("Syntax error on line {line}: Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator that could not be applied.
        operator: char,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl LineError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnbalancedBrackets { line }
            | Self::NonNumericCharacter { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::StackUnderflow { line, .. } => *line,
        }
    }
}
