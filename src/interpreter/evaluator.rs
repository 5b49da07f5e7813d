/// Core evaluation logic and line state transitions.
///
/// Contains the `Evaluator`, the per-character state machine and the
/// end-of-line procedure that produces a line's result.
pub mod core;

/// Stream evaluation.
///
/// Drives the evaluator over a buffered reader one line at a time and writes
/// each result or diagnostic to an output sink.
pub mod stream;
