use std::path::PathBuf;

use crate::output::OutputMode;

/// Scanner binary invoked when none is given on the command line
pub const DEFAULT_SCANNER: &str = "checkov";

/// Runtime configuration, built once from CLI arguments and passed to
/// both the skip-code extractor and the scan invoker
#[derive(Debug, Clone)]
pub struct Config {
    /// File with one skip code per line
    pub skip_file: PathBuf,
    /// Directory handed to the scanner's -d flag
    pub scan_path: PathBuf,
    /// Name or path of the scanner binary
    pub scanner_bin: String,
    pub mode: OutputMode,
}
