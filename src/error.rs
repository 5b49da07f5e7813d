/// Per-line evaluation errors.
///
/// Errors raised while evaluating a single expression line, such as
/// unbalanced brackets or characters that are not part of the grammar. They
/// discard the current line only; evaluation resumes at the next line.
pub mod line_error;
/// Fatal input errors.
///
/// Errors that stop the whole run before or while reading the input, such as
/// a missing file name or a file that cannot be opened.
pub mod input_error;

pub use input_error::InputError;
pub use line_error::LineError;
