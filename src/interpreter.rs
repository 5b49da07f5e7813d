/// The evaluator module turns expression lines into results.
///
/// The evaluator consumes the tokens of a line one by one, maintains the
/// value and operator stacks, applies operators as their bracket groups
/// close, and reports malformed lines.
///
/// # Responsibilities
/// - Runs the per-character state machine and the end-of-line procedure.
/// - Isolates per-line errors so that following lines are unaffected.
/// - Streams whole inputs and writes results and diagnostics.
pub mod evaluator;
/// The lexer module classifies the characters of a line.
///
/// Each token covers exactly one character: digits, the decimal point,
/// operators, brackets and the comment marker. Anything else is a lexical
/// error.
pub mod lexer;
/// Binary arithmetic operators.
pub mod operator;
/// The per-line state: value stack, operator stack, pending number and
/// bracket depth.
pub mod state;
