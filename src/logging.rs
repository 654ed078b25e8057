//! Structured logging setup
//!
//! The console game logs to stderr without timestamps so records never interleave
//! with the game on stdout. The TUI owns the whole terminal, so its logs are
//! discarded. `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Nowhere; used while the alternate screen is active
    Discard,
}

impl LogTarget {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::Discard => BoxMakeWriter::new(std::io::sink),
        }
    }
}

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(target.make_writer())
        .without_time()
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }

    #[test]
    fn discard_target_swallows_records() {
        let writer = LogTarget::Discard.make_writer();
        let mut sink = writer.make_writer();
        assert_eq!(sink.write(b"match started\n").unwrap(), 14);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, LogTarget::Discard);
        init(2, LogTarget::Stderr);
    }
}
