//! # parenval
//!
//! parenval evaluates fully parenthesized arithmetic expressions, one per
//! line, in a single pass over the characters of each line. It supports the
//! operators `+ - * /`, decimal numbers and `#` comment lines, and reports
//! malformed lines without stopping the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};

use crate::{
    error::{InputError, LineError},
    interpreter::evaluator::{core::Evaluator, stream::Summary},
};

/// Provides the error types of the crate.
///
/// This module separates errors that discard a single line from errors that
/// end the whole run. Line errors carry the line number they were raised on,
/// and all errors render as the diagnostic line that is printed for them.
///
/// # Responsibilities
/// - Defines `LineError` for unbalanced brackets, foreign characters, invalid
///   number literals and missing operands.
/// - Defines `InputError` for missing or unreadable input and I/O failures.
pub mod error;
/// Evaluates expression lines.
///
/// This module ties together the lexer, the per-line state and the
/// evaluator, and exposes the entry points used by the command line tool.
///
/// # Responsibilities
/// - Classifies characters into tokens.
/// - Keeps the value stack, operator stack, pending number and bracket depth
///   of the current line.
/// - Streams whole inputs and writes results and diagnostics.
pub mod interpreter;

/// Evaluates the file at `path` and writes each result or diagnostic to `out`.
///
/// The file is read one line at a time and closed when evaluation ends.
///
/// # Errors
/// - [`InputError::MissingFileName`] if `path` is `None`.
/// - [`InputError::FileNotFound`] if the file cannot be opened or is a
///   directory.
/// - [`InputError::Io`] if reading or writing fails midway.
pub fn evaluate_file<W: Write>(path: Option<&Path>, out: W) -> Result<Summary, InputError> {
    let path = path.ok_or(InputError::MissingFileName)?;
    let file = File::open(path).map_err(|source| InputError::FileNotFound { path: path.to_path_buf(),
                                                                             source })?;
    if file.metadata().is_ok_and(|meta| meta.is_dir()) {
        return Err(InputError::FileNotFound { path:   path.to_path_buf(),
                                              source: io::Error::new(io::ErrorKind::InvalidInput,
                                                                     "is a directory"), });
    }

    Evaluator::new().evaluate(BufReader::new(file), out)
}

/// Evaluates every line of `source` and returns one entry per line that
/// produced output.
///
/// Blank lines and comments produce no entry.
///
/// # Examples
/// ```
/// use parenval::{error::LineError, evaluate_str};
///
/// let results = evaluate_str("(3+4)\n# comment\n(3+a)\n((2*3)+4)");
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0], Ok(7.0));
/// assert!(matches!(results[1], Err(LineError::NonNumericCharacter { line: 3, .. })));
/// assert_eq!(results[2], Ok(10.0));
/// ```
#[must_use]
pub fn evaluate_str(source: &str) -> Vec<Result<f64, LineError>> {
    let mut evaluator = Evaluator::new();

    source.lines()
          .filter_map(|line| evaluator.eval_line(line).transpose())
          .collect()
}
