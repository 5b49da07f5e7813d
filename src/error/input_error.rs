use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents errors that end a run as a whole.
pub enum InputError {
    /// No input path was passed on the command line.
    #[error("Error: No file name was given.")]
    MissingFileName,
    /// The input file does not exist or cannot be opened.
    #[error("Error: File '{}' could not be found or opened.", .path.display())]
    FileNotFound {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying open failure.
        #[source]
        source: io::Error,
    },
    /// Reading the input or writing the output failed midway.
    #[error("Error: I/O failure: {0}")]
    Io(#[from] io::Error),
}
