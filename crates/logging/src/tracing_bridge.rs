//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing-subscriber` fmt layer driven by [`VerbosityConfig`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "features::compat", "peer rejected");
//! ```

use tracing_subscriber::EnvFilter;

use super::config::VerbosityConfig;

/// Builds the filter for `config`, letting `RUST_LOG` take precedence when set.
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.to_directives()))
}

/// Installs the global subscriber.
///
/// Returns `false` when a global subscriber was already installed, which
/// keeps repeated initialisation from tests and embedders harmless.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs a subscriber that writes through the test harness capture.
pub fn init_test_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&VerbosityConfig::from_verbose_level(3)))
        .with_test_writer()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        let _ = init_test_tracing();
        assert!(!init_test_tracing());
        assert!(!init_tracing(VerbosityConfig::default()));
    }
}
