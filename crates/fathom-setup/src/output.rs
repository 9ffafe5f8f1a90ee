//! Writer-injected output streams for setup operations.
//!
//! Handlers never write to the process streams directly; they receive a
//! [`SetupOutput`] wrapper so tests can substitute in-memory buffers.

use std::fmt;
use std::io::Write;

use crate::errors::SetupError;

/// Output handle abstracting over stdout/stderr writers.
pub(crate) struct SetupOutput<W: Write, E: Write> {
    stdout: W,
    stderr: E,
}

impl<W: Write, E: Write> SetupOutput<W, E> {
    pub(crate) fn new(stdout: W, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    pub(crate) fn stdout_line(&mut self, args: fmt::Arguments<'_>) -> Result<(), SetupError> {
        self.stdout.write_fmt(args).map_err(SetupError::Io)?;
        self.stdout.write_all(b"\n").map_err(SetupError::Io)?;
        self.stdout.flush().map_err(SetupError::Io)
    }

    pub(crate) fn stderr_line(&mut self, args: fmt::Arguments<'_>) -> Result<(), SetupError> {
        self.stderr.write_fmt(args).map_err(SetupError::Io)?;
        self.stderr.write_all(b"\n").map_err(SetupError::Io)?;
        self.stderr.flush().map_err(SetupError::Io)
    }
}
