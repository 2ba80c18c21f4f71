// crates/extract_docstrings/src/lib.rs

use std::path::PathBuf;

use docstring_markdown::{write_markdown, WriteError};
use docstring_scanner::{scan_file, ScanError};
use thiserror::Error;
use tracing::{debug, info};

pub mod cli;
pub mod logging;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Source file to scan.
    pub file_path: PathBuf,
    /// Markdown file to create or overwrite.
    pub output_file: PathBuf,
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The specified file does not exist: {}", path.display())]
    InputMissing { path: PathBuf },
    #[error("An error occurred while extracting docstrings: {0}")]
    Scan(#[from] ScanError),
    #[error("An error occurred while saving docstrings: {0}")]
    Write(#[from] WriteError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub docstrings: usize,
    pub output_file: PathBuf,
}

/// Scans `config.file_path` and writes the Markdown report.
///
/// The input must be an existing regular file; otherwise nothing is scanned
/// and the output file is left untouched. The first failure aborts the run.
pub fn run(config: &ExtractConfig) -> Result<RunSummary, ExtractError> {
    debug!("Configuration: {:?}", config);

    if !config.file_path.is_file() {
        return Err(ExtractError::InputMissing {
            path: config.file_path.clone(),
        });
    }

    info!("Extracting docstrings from {}", config.file_path.display());
    let blocks = scan_file(&config.file_path)?;
    info!("Extracted {} docstrings", blocks.len());

    info!("Saving docstrings to {}", config.output_file.display());
    write_markdown(&blocks, &config.output_file)?;
    info!("Docstrings successfully saved to {}", config.output_file.display());

    Ok(RunSummary {
        docstrings: blocks.len(),
        output_file: config.output_file.clone(),
    })
}
