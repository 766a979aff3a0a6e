//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install the global JSON subscriber
///
/// `service.log_level` is parsed as an [`EnvFilter`] directive and falls back
/// to `info` when it doesn't parse. Fails if a global subscriber is already set.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(&config.service.log_level))
        .try_init()
        .map_err(|e| Error::Internal(format!("failed to install tracing subscriber: {e}")))?;

    tracing::info!(
        environment = %config.service.environment,
        "Tracing initialized for service: {}",
        config.service.name
    );

    Ok(())
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_to_info() {
        assert_eq!(env_filter("author_service=loud").to_string(), "info");
        assert_eq!(env_filter("debug").to_string(), "debug");
    }

    #[test]
    fn test_init_tracing_twice_is_an_error() {
        let config = Config::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
