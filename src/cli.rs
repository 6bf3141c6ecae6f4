use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_SCANNER};
use crate::output::OutputMode;
use crate::{scanner, skip_codes};

#[derive(Parser)]
#[command(name = "ckvscan")]
#[command(version)]
#[command(about = "Run checkov with skip codes taken from a definition file")]
#[command(long_about = "ckvscan reads a skip-code definition file, joins the codes into a \
    --skip-check argument and runs the scanner against a target directory.\n\n\
    Examples:\n  \
    ckvscan --file skip_codes.txt --path ./terraform\n  \
    ckvscan --file skip_codes.txt --path . -v")]
pub struct Cli {
    /// Path to the file with skip codes, one per line
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Directory with the files to scan
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Scanner binary to invoke
    #[arg(long, default_value = DEFAULT_SCANNER, value_name = "NAME")]
    pub scanner: String,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config {
            skip_file: self.file,
            scan_path: self.path,
            scanner_bin: self.scanner,
            mode: OutputMode::from_flags(self.quiet, self.verbose),
        };

        // A missing or unreadable skip file fails here, before any scan
        let codes = skip_codes::extract(&config.skip_file)?;
        scanner::run(&config, &codes)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_and_path_are_required() {
        assert!(Cli::try_parse_from(["ckvscan"]).is_err());
        assert!(Cli::try_parse_from(["ckvscan", "--file", "codes.txt"]).is_err());
        assert!(Cli::try_parse_from(["ckvscan", "--file", "codes.txt", "--path", "."]).is_ok());
    }

    #[test]
    fn test_scanner_defaults_to_checkov() {
        let cli = Cli::try_parse_from(["ckvscan", "--file", "codes.txt", "--path", "."]).unwrap();
        assert_eq!(cli.scanner, DEFAULT_SCANNER);
        assert_eq!(cli.file, PathBuf::from("codes.txt"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let parsed =
            Cli::try_parse_from(["ckvscan", "--file", "codes.txt", "--path", ".", "-q", "-v"]);
        assert!(parsed.is_err());
    }
}
