//! Tracing setup for the `clubmap` binary.
//!
//! Events from the loader, builder and writer go to stderr so stdout only
//! carries the `Saved map to:` line.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the binary reports while it runs, picked from `-q` / `-v` / `-vv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive scoping `level()` to this crate's events.
    #[must_use]
    pub fn directive(self) -> String {
        format!("clubmap={}", self.level())
    }
}

/// Install the stderr subscriber. A `RUST_LOG` value wins over `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let stderr = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // A second call keeps the first subscriber
    let _ = tracing_subscriber::registry().with(filter).with(stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_levels() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::default().level(), Level::INFO);
        assert_eq!(Verbosity::Verbose.level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn test_directive_names_crate() {
        assert_eq!(Verbosity::Verbose.directive(), "clubmap=DEBUG");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Verbose);
    }
}
