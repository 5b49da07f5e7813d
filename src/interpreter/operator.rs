/// Represents a binary arithmetic operator.
///
/// Operators carry no precedence: the order of application is dictated
/// entirely by the brackets of the expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use parenval::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Computes `left OP right` with plain `f64` semantics.
    ///
    /// Division by zero is not an error; it yields an infinity or `NaN`.
    ///
    /// # Example
    /// ```
    /// use parenval::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0), 6.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

