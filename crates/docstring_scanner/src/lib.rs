// crates/docstring_scanner/src/lib.rs

//! Line-oriented scanner that pulls triple-quoted blocks out of a source file.
//!
//! The scan is purely lexical: any line containing `"""` or `'''` flips the
//! inside/outside toggle, regardless of where the marker sits on the line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Delimiters recognised as opening or closing a block.
pub const TRIPLE_QUOTE_MARKERS: [&str; 2] = ["\"\"\"", "'''"];

/// One extracted block: the stripped lines from the opening marker line
/// through the closing marker line, joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    /// 1-based line of the opening marker.
    pub start_line: usize,
    /// 1-based line of the closing marker.
    pub end_line: usize,
}

impl TextBlock {
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns true if the line holds either triple-quote marker anywhere.
pub fn contains_marker(line: &str) -> bool {
    TRIPLE_QUOTE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Scans in-memory content and returns every closed block in source order.
///
/// A line carrying both an opening and a closing marker (`""" text """`)
/// only counts as a single toggle. A block still open at end of input is
/// dropped.
pub fn scan_content(content: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut inside_block = false;
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0;

    for (idx, line) in content.lines().enumerate() {
        let stripped = line.trim();
        if contains_marker(line) {
            current.push(stripped);
            if inside_block {
                blocks.push(TextBlock {
                    text: current.join("\n"),
                    start_line,
                    end_line: idx + 1,
                });
                current.clear();
                inside_block = false;
            } else {
                start_line = idx + 1;
                inside_block = true;
            }
        } else if inside_block {
            current.push(stripped);
        }
    }

    if inside_block {
        debug!(
            "Dropping unterminated block opened at line {} ({} line(s))",
            start_line,
            current.len()
        );
    }
    blocks
}

/// Reads the whole file at `path` and scans it.
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<TextBlock>, ScanError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScanError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let blocks = scan_content(&content);
    for (index, block) in blocks.iter().enumerate() {
        debug!(
            "Docstring {} spans lines {}-{} of {}",
            index + 1,
            block.start_line,
            block.end_line,
            path.display()
        );
    }
    Ok(blocks)
}
