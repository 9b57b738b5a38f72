use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    address_cache::DEFAULT_CACHE_TTL,
    rate_limiter::DEFAULT_MIN_INTERVAL,
    sources::{DEFAULT_CANDIDATE_LIMIT, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT},
};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Address resolution settings. Every field has a default, so a config file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub geocoding_endpoint: String,
    pub user_agent: String,
    pub min_request_interval_ms: u64,
    pub cache_ttl_secs: u64,
    pub candidate_limit: usize,
    pub request_timeout_secs: u64,
    /// When false, seeded requests skip every network tier and are served by
    /// the synthetic tier only, making the address fully reproducible.
    pub seeded_network_lookups: bool,
    /// When true, no geocoding tier is installed at all.
    pub offline: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            geocoding_endpoint: DEFAULT_ENDPOINT.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            min_request_interval_ms: DEFAULT_MIN_INTERVAL.as_millis() as u64,
            cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            seeded_network_lookups: true,
            offline: false,
        }
    }
}

impl ResolverConfig {
    /// Load overrides from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::info!("loaded resolver config from {path}");
        Ok(config)
    }

    /// Config with no network tiers and a zero-interval limiter.
    pub fn default_test() -> Self {
        Self {
            min_request_interval_ms: 0,
            offline: true,
            ..Self::default()
        }
    }

    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = ResolverConfig::default();
        assert_eq!(config.min_request_interval(), Duration::from_millis(1000));
        assert_eq!(config.cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.candidate_limit, 5);
        assert_eq!(config.user_agent, "US-Fake-Data-Generator/1.0");
        assert!(config.seeded_network_lookups);
        assert!(!config.offline);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "offline": true, "cache_ttl_secs": 60 }"#).expect("parse");
        assert!(config.offline);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.candidate_limit, 5);
    }

    #[test]
    fn load_reports_missing_file() {
        let error = ResolverConfig::load("/nonexistent/synthid.json").expect_err("missing file");
        assert!(error.to_string().contains("Cannot read"));
    }
}
