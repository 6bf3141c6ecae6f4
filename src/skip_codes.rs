use std::fs;
use std::path::Path;

use crate::error::ScanError;

/// Read a skip-code definition file and join the codes with commas
///
/// Each non-empty line holds a code token (optionally colon-suffixed)
/// followed by whitespace and a free-text description. Only the first
/// field of each line is used.
pub fn extract(path: &Path) -> Result<String, ScanError> {
    let contents = fs::read_to_string(path).map_err(|source| ScanError::SkipFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(join_codes(&contents))
}

/// Collect the first field of every line, colon-stripped, in file order
///
/// Duplicates are kept; lines without any field contribute nothing.
fn join_codes(contents: &str) -> String {
    contents
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|code| code.replace(':', ""))
        .collect::<Vec<_>>()
        .join(",")
}
