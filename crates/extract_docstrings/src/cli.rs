// crates/extract_docstrings/src/cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::ExtractConfig;

pub const TOOL_NAME: &str = "Scan-Docstring-Comment-Extractor";
pub const TOOL_VERSION: &str = "1.0";

pub fn build_command() -> Command {
    Command::new(TOOL_NAME)
        .bin_name("extract_docstrings")
        .version(TOOL_VERSION)
        .about("Extracts and formats code docstrings into a uniform Markdown style.")
        .arg(
            Arg::new("file_path")
                .long("file-path")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to the Python file containing the docstrings to be extracted"),
        )
        .arg(
            Arg::new("output_file")
                .long("output-file")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to the Markdown file where the extracted docstrings will be saved"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

impl ExtractConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let file_path = matches
            .get_one::<PathBuf>("file_path")
            .context("missing --file-path")?
            .clone();
        let output_file = matches
            .get_one::<PathBuf>("output_file")
            .context("missing --output-file")?
            .clone();
        let verbose = matches.get_flag("verbose");
        Ok(Self {
            file_path,
            output_file,
            verbose,
        })
    }
}
