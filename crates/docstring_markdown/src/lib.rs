// crates/docstring_markdown/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docstring_scanner::TextBlock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders the blocks as numbered Markdown sections, one fenced code block
/// each. An empty slice renders to an empty string.
pub fn render_markdown(blocks: &[TextBlock]) -> String {
    let mut output = String::new();
    for (index, block) in blocks.iter().enumerate() {
        output.push_str(&format!("## Docstring {}\n\n", index + 1));
        output.push_str(&format!("```\n{}\n```\n\n", block.text));
    }
    output
}

/// Renders the blocks and writes them to `output_file`, replacing any
/// existing content.
pub fn write_markdown<P: AsRef<Path>>(blocks: &[TextBlock], output_file: P) -> Result<(), WriteError> {
    let output_file = output_file.as_ref();
    let markdown = render_markdown(blocks);
    debug!("Writing {} byte(s) to {}", markdown.len(), output_file.display());
    fs::write(output_file, markdown).map_err(|source| WriteError::Io {
        path: output_file.to_path_buf(),
        source,
    })
}
