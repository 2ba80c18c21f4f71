// crates/extract_docstrings/src/main.rs

use std::process::ExitCode;

use extract_docstrings::cli::build_command;
use extract_docstrings::logging::LogConfig;
use extract_docstrings::{run, ExtractConfig};
use tracing::error;

fn main() -> ExitCode {
    // clap handles --help, --version and usage errors itself.
    let matches = build_command().get_matches();

    let config = match ExtractConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let subscriber = LogConfig::new(config.verbose).build_subscriber();
    tracing::subscriber::with_default(subscriber, || match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    })
}
