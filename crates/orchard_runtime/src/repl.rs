//! The interactive loop.

use std::io::{self, Write};

use orchard_foundation::ErrorContext;
use tracing::debug;

use crate::command::Command;
use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::session::{Outcome, Session};

/// Source name attached to parse errors typed at the prompt.
const REPL_SOURCE: &str = "<repl>";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The orchard handle commands run against.
    session: Session,

    /// Prompt, banner, and quit behavior.
    config: ReplConfig,

    /// Lines read so far, for error locations.
    line: usize,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor).with_config(config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL over the given editor with the default configuration.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            config: ReplConfig::default(),
            line: 0,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the loop against stdout until EOF or `Quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or stdout fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the loop, writing outcomes to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or `out` fails. Malformed lines and
    /// rejected commands are reported and do not end the loop.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.config.show_banner {
            print_banner(out)?;
        }

        while self.read_eval_print(out)? {}

        Ok(())
    }

    /// Parses and runs one line.
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Parse`] if the line is malformed.
    pub fn eval(&mut self, line: &str) -> Result<Option<Outcome>> {
        Ok(self
            .parse(line)?
            .map(|command| self.session.execute(&command)))
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };
        self.line += 1;

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        let command = match self.parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(true);
            }
        };

        let outcome = self.session.execute(&command);
        writeln!(out, "{outcome}")?;
        if let Some(e) = &outcome.error {
            writeln!(out, "  {e}")?;
        }

        let quit = command == Command::Quit && self.config.exit_on_quit;
        if quit {
            debug!("leaving repl on Quit");
        }
        Ok(!quit)
    }

    fn parse(&self, line: &str) -> Result<Option<Command>> {
        Command::parse(line).map_err(|error| RuntimeError::Parse {
            error,
            context: ErrorContext::new()
                .with_source(REPL_SOURCE)
                .with_line(self.line.max(1)),
        })
    }
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Orchard {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Commands: {}", Command::names().collect::<Vec<_>>().join(", "))?;
    writeln!(out, "Ctrl+D to exit.")?;
    writeln!(out)
}
