//! Running command files against a session.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use orchard_foundation::ErrorContext;
use tracing::{debug, info};

use crate::command::Command;
use crate::error::{Result, RuntimeError};
use crate::session::Session;

/// Counts from one script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed.
    pub commands: usize,
    /// Commands that did not succeed.
    pub failures: usize,
}

/// Runs every line of `reader` against `session`, writing one outcome line
/// per command to `writer`.
///
/// Rejected commands are reported and counted, not fatal.
///
/// # Errors
///
/// Returns [`RuntimeError::Parse`] for the first malformed line, carrying
/// `source` and the 1-based line number. Commands before it have already
/// run. Returns [`RuntimeError::Io`] if reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    source: &str,
    reader: R,
    writer: &mut W,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                return Err(RuntimeError::Parse {
                    error,
                    context: ErrorContext::new()
                        .with_source(source)
                        .with_line(index + 1),
                });
            }
        };

        let outcome = session.execute(&command);
        summary.commands += 1;
        if !outcome.is_success() {
            summary.failures += 1;
            debug!(
                source,
                line = index + 1,
                %command,
                status = %outcome.status,
                "command rejected"
            );
        }
        writeln!(writer, "{outcome}")?;
    }

    info!(
        source,
        commands = summary.commands,
        failures = summary.failures,
        "script finished"
    );
    Ok(summary)
}

/// Runs a command file.
///
/// # Errors
///
/// Returns [`RuntimeError::Io`] if the file cannot be opened, otherwise as
/// [`run`].
pub fn run_file<W: Write>(
    session: &mut Session,
    path: &Path,
    writer: &mut W,
) -> Result<ScriptSummary> {
    let file = File::open(path)?;
    run(session, &path.display().to_string(), BufReader::new(file), writer)
}
