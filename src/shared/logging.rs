//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout only carries
//! rendered views.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter: `RUST_LOG` wins, then the configured level, then
/// [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(configured_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(configured_level.unwrap_or(DEFAULT_LOG_LEVEL))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// Installs the global stderr subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(configured_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(Some("debug"));
        init_logging(Some("info"));
        tracing::debug!("still alive");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let filter = build_filter(Some("not a [valid] directive=="));
        assert!(!filter.to_string().is_empty());
    }
}
