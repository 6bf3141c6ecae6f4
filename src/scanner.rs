use std::path::Path;
use std::process::Command;

use colored::*;

use crate::config::Config;
use crate::error::ScanError;
use crate::output::OutputMode;

/// Build the scanner argument vector for a target path and skip-code list
///
/// The skip-code string may be empty; it is passed through unchanged and
/// the scanner decides what an empty suppression list means.
pub fn build_args(path: &Path, skip_codes: &str) -> Vec<String> {
    vec![
        "-d".to_string(),
        path.to_string_lossy().into_owned(),
        "--skip-check".to_string(),
        skip_codes.to_string(),
    ]
}

/// Run the external scanner synchronously, blocking until it exits
///
/// The scanner's exit status is not interpreted or propagated; a run that
/// launched and terminated counts as success for the wrapper.
pub fn run(config: &Config, skip_codes: &str) -> Result<(), ScanError> {
    // Cosmetic: the scanner accepts relative paths as well
    let target = config
        .scan_path
        .canonicalize()
        .unwrap_or_else(|_| config.scan_path.clone());
    let args = build_args(&target, skip_codes);

    if config.mode != OutputMode::Quiet {
        println!(
            "{} {} {}",
            "Executing:".cyan(),
            config.scanner_bin,
            args.join(" ")
        );
    }

    let status = Command::new(&config.scanner_bin)
        .args(&args)
        .status()
        .map_err(|source| ScanError::Launch {
            binary: config.scanner_bin.clone(),
            source,
        })?;

    if config.mode == OutputMode::Verbose {
        println!("{} exited with {}", config.scanner_bin, status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_argument_vector_shape() {
        let args = build_args(Path::new("/srv/terraform"), "CKV_AWS_1,CKV_AWS_2");
        assert_eq!(
            args,
            vec!["-d", "/srv/terraform", "--skip-check", "CKV_AWS_1,CKV_AWS_2"]
        );
    }

    #[test]
    fn test_empty_skip_list_still_passed() {
        let args = build_args(Path::new("."), "");
        assert_eq!(args.len(), 4);
        assert_eq!(args[3], "");
    }

    #[test]
    fn test_launch_failure_is_launch_error() {
        let config = Config {
            skip_file: PathBuf::from("unused"),
            scan_path: PathBuf::from("."),
            scanner_bin: "ckvscan-no-such-binary".to_string(),
            mode: OutputMode::Quiet,
        };
        let err = run(&config, "").unwrap_err();
        assert!(matches!(err, ScanError::Launch { .. }));
    }
}
