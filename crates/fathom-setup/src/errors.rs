//! Error types for the setup runtime.
//!
//! Most cleanup failures are swallowed as best-effort work; the variants here
//! cover the narrow set of conditions that abort an operation: interruption,
//! copy and replace failures during plugin installation, and IO failures on
//! the tool's own output streams.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SetupError {
    #[error("{0}")]
    CliUsage(clap::Error),
    /// Always propagates out of best-effort cleanup loops.
    #[error("interrupted; aborting cleanup")]
    Interrupted,
    #[error("failed to write setup output: {0}")]
    Io(#[source] io::Error),
    #[error("failed to write version artifact {path}: {source}")]
    WriteVersionArtifact {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove existing artifact {path:?}: {source}")]
    RemoveArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy {src:?} -> {dst:?}: {source}")]
    CopyArtifact {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch test runner '{runner:?}': {source}")]
    LaunchTestRunner {
        runner: OsString,
        #[source]
        source: io::Error,
    },
}
