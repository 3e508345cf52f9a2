//! Buffered line loading for ACH files
//!
//! Reads a file into the line sequence the decoder consumes. Blank lines
//! are skipped here (they carry no record) so the decoder only ever sees
//! candidate records; everything else, including short or malformed lines,
//! is passed through for the decoder's own resilience rules.
//!
//! # Error Handling
//!
//! Fatal errors (file not found, unreadable file) are returned to the
//! caller; there are no per-line errors at this layer.

use crate::types::AchError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read an ACH file into lines, skipping blanks
///
/// # Errors
///
/// Returns [`AchError::Io`] if the file cannot be opened or read.
pub fn read_ach_lines(path: &Path) -> Result<Vec<String>, AchError> {
    let file = File::open(path).map_err(|e| AchError::Io {
        message: format!("Failed to open file '{}': {}", path.display(), e),
    })?;

    let mut lines = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!(line = index + 1, "skipping blank line");
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}
