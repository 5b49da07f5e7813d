use logos::Logos;

use crate::interpreter::operator::BinaryOperator;

/// Represents a lexical token of an expression line.
///
/// Every token covers exactly one character, so the evaluator still sees the
/// line one character at a time. Characters not listed here (including
/// whitespace) make the lexer yield an error for that slice.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `#`, starts a comment that runs to the end of the line.
    #[token("#")]
    Hash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One of `+`, `-`, `*` or `/`.
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    Operator(BinaryOperator),
    /// `.`
    #[token(".")]
    Dot,
    /// A single decimal digit.
    #[regex(r"[0-9]", parse_digit)]
    Digit(char),
}

/// Maps the current slice to its operator.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<BinaryOperator> {
    BinaryOperator::from_symbol(lex.slice())
}

/// Returns the digit character of the current slice.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next().filter(char::is_ascii_digit)
}
