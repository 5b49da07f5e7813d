use std::io::{BufRead, Write};

use tracing::info;

use crate::{error::InputError, interpreter::evaluator::core::Evaluator};

/// Counts collected while evaluating a stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read, including blank and comment lines.
    pub lines:   usize,
    /// Lines that produced a value.
    pub results: usize,
    /// Lines that produced a diagnostic.
    pub errors:  usize,
}

impl Evaluator {
    /// Evaluates every line of `reader` and writes one output line per result
    /// or diagnostic to `out`.
    ///
    /// Lines may end in `\n` or `\r\n`; a last line without terminator is
    /// evaluated as well. Bytes that are not valid UTF-8 are reported as
    /// non-numeric characters of their line.
    ///
    /// # Errors
    /// Returns [`InputError::Io`] if reading or writing fails. Malformed lines
    /// are never errors at this level.
    ///
    /// # Example
    /// ```
    /// use parenval::interpreter::evaluator::core::Evaluator;
    ///
    /// let mut out = Vec::new();
    /// let summary = Evaluator::new().evaluate("(3+4)\n# note\n(10/2)".as_bytes(), &mut out)
    ///                               .unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "7\n5\n");
    /// assert_eq!(summary.lines, 3);
    /// assert_eq!(summary.results, 2);
    /// ```
    pub fn evaluate<R: BufRead, W: Write>(&mut self,
                                          mut reader: R,
                                          mut out: W)
                                          -> Result<Summary, InputError> {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            let text = String::from_utf8_lossy(strip_line_ending(&buf));
            match self.eval_line(&text) {
                Ok(Some(value)) => {
                    summary.results += 1;
                    writeln!(out, "{value}")?;
                },
                Ok(None) => {},
                Err(e) => {
                    summary.errors += 1;
                    writeln!(out, "{e}")?;
                },
            }
        }
        out.flush()?;

        info!(lines = summary.lines,
              results = summary.results,
              errors = summary.errors,
              "input evaluated");
        Ok(summary)
    }
}

fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
