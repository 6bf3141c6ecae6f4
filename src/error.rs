use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures the wrapper itself can produce
///
/// The external scanner's exit status is deliberately not part of this
/// taxonomy; the wrapper only reports that the process ran.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The skip-code definition file could not be opened or read
    #[error("cannot read skip-code file {path}: {source}")]
    SkipFile { path: PathBuf, source: io::Error },

    /// The scanner binary could not be started
    #[error("failed to launch scanner `{binary}`: {source}")]
    Launch { binary: String, source: io::Error },
}
