use crate::error::ConfigError;
use std::env;
use std::time::Duration;

pub const API_URL_VAR: &str = "LISTING_API_URL";
pub const API_TOKEN_VAR: &str = "LISTING_API_TOKEN";
pub const API_TIMEOUT_VAR: &str = "LISTING_API_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "LISTING_API_USER_AGENT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the listing API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.com/v1`
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    /// Read settings from the process environment.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(API_URL_VAR))?;

        let mut config = Self::new(base_url);
        config.token = lookup(API_TOKEN_VAR).filter(|v| !v.is_empty());

        if let Some(raw) = lookup(API_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: API_TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(agent) = lookup(USER_AGENT_VAR).filter(|v| !v.is_empty()) {
            config.user_agent = agent;
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("listing-wizard/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn requires_base_url() {
        let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_URL_VAR)));
    }

    #[test]
    fn applies_defaults_and_trims_slash() {
        let config = ApiConfig::from_lookup(lookup(&[(API_URL_VAR, "https://api.example.com/v1/")])).unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("listing-wizard/"));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ApiConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.example.com"),
            (API_TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: API_TIMEOUT_VAR, .. }));
    }

    #[test]
    fn reads_token_and_timeout() {
        let config = ApiConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.example.com"),
            (API_TOKEN_VAR, "secret"),
            (API_TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
