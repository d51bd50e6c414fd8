//! Diagnostic logging for the `tasklist` binary.
//!
//! Library code emits `tracing` events; this module installs the subscriber
//! that prints them. Output goes to stderr so task listings on stdout stay
//! clean. `RUST_LOG` takes precedence over the configured default level.

use tracing_subscriber::EnvFilter;

/// Build the event filter, preferring `RUST_LOG` over `default_level`.
#[must_use]
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!(default_level, "Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("debug");
        tracing::info!("still logging");
    }

    #[test]
    fn test_env_filter_accepts_directives() {
        let filter = env_filter("tasklist=debug");
        assert!(!filter.to_string().is_empty());
    }
}
