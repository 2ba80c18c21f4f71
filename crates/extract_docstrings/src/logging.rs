// crates/extract_docstrings/src/logging.rs

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Log settings handed to the driver instead of mutating a global logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogConfig {
    pub verbose: bool,
}

impl LogConfig {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// `debug` when verbose, `info` otherwise.
    pub fn default_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// A valid `RUST_LOG` takes precedence over the verbosity flag.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_level()))
    }

    /// Timestamped, leveled lines on stderr.
    pub fn build_subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .finish()
    }
}
