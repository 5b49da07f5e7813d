use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use parenval::evaluate_file;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// parenval evaluates fully parenthesized arithmetic expressions, one per
/// line, and prints one result or diagnostic per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one expression per line. Lines starting with `#` are
    /// comments.
    file: Option<PathBuf>,

    /// Anything after the file name is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

fn main() {
    tracing_subscriber::registry().with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
                                  .with(fmt::layer().with_writer(io::stderr))
                                  .init();

    let stdout = io::stdout();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // `--help` and `--version` print as usual; argument errors become a
        // diagnostic line like any other.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return;
        },
        Err(e) => {
            let _ = write!(stdout.lock(), "{e}");
            return;
        },
    };

    if let Err(e) = evaluate_file(args.file.as_deref(), stdout.lock()) {
        // Fatal diagnostics go to the same stream as per-line ones; the exit
        // status stays successful.
        let _ = writeln!(stdout.lock(), "{e}");
    }
}
