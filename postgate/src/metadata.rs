//! Post header scanning.
//!
//! Two-stage approach:
//! 1. Read a fixed window of leading lines from the post file
//! 2. A scan regex extracts `key: value` pairs from that window

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::EnvironmentError;

/// Scan pattern: a run of word characters, a colon, optional whitespace,
/// then the rest of the line. Deliberately loose — it matches anywhere in
/// a line, not only at line starts, and it makes no attempt to find
/// front-matter delimiters. Validation decides which keys matter.
static HEADER_PAIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(\w+):\s*(.*)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid header scan regex: {err}"),
    }
});

/// Read exactly the first `header_lines` lines of `path` as one block.
///
/// The file handle is held only for the duration of the read and is
/// released on every exit path.
///
/// # Errors
///
/// Returns [`EnvironmentError::Io`] if the file cannot be opened or a
/// line cannot be read, and [`EnvironmentError::TruncatedHeader`] if the
/// file has fewer than `header_lines` lines. A short file is never
/// silently validated against a partial header.
pub fn read_header_block(path: &Path, header_lines: usize) -> Result<String, EnvironmentError> {
    let file = File::open(path).map_err(|source| EnvironmentError::Io {
        file: path.to_owned(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut block = String::new();
    let mut count = 0;
    for line in reader.lines() {
        let line = line.map_err(|source| EnvironmentError::Io {
            file: path.to_owned(),
            source,
        })?;
        block.push_str(&line);
        block.push('\n');
        count += 1;
        if count == header_lines {
            return Ok(block);
        }
    }

    Err(EnvironmentError::TruncatedHeader {
        file: path.to_owned(),
        lines: count,
        expected: header_lines,
    })
}

/// Extract all `(key, value)` pairs from a header block.
///
/// Pairs are returned in order of appearance. Duplicate keys are kept as
/// independent pairs. Values are the raw remainder of the line — trailing
/// comments, quotes, and whitespace are preserved verbatim.
#[must_use]
pub fn extract_pairs(block: &str) -> Vec<(String, String)> {
    HEADER_PAIR_PATTERN
        .captures_iter(block)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}
