/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Quiet,   // Only errors
    Normal,  // Standard output
    Verbose, // More details, including the scanner's exit status
}

impl OutputMode {
    /// Map the -q/-v flags to a mode
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            OutputMode::Quiet
        } else if verbose >= 1 {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}
