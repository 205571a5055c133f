//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use graphite_common::{Address, GraphiteError, Result};

/// Connection settings for the Graphite client
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Node RPC endpoint, consumed by the provider adapter
    pub node_url: Option<String>,
    /// Signing key for the provider adapter, never logged
    #[serde(skip_serializing)]
    pub private_key: Option<String>,
    /// Explorer API base URL; network stats are disabled without it
    pub api_url: Option<String>,
    /// Wallet to act as when the provider is seeded locally
    pub wallet_address: Option<Address>,
    /// Timeout for explorer HTTP requests
    pub http_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_url: None,
            private_key: None,
            api_url: None,
            wallet_address: None,
            http_timeout_secs: crate::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        cfg.node_url = non_empty("GRAPHITE_NODE_URL");
        cfg.private_key = non_empty("PRIVATE_KEY");
        cfg.api_url = non_empty("GRAPHITE_API_URL");

        if let Some(addr) = non_empty("GRAPHITE_WALLET_ADDRESS") {
            let parsed = Address::parse(&addr)
                .map_err(|e| GraphiteError::Config(format!("GRAPHITE_WALLET_ADDRESS: {e}")))?;
            cfg.wallet_address = Some(parsed);
        }

        if let Some(val) = non_empty("GRAPHITE_HTTP_TIMEOUT_SECS") {
            cfg.http_timeout_secs = val.parse().map_err(|_| {
                GraphiteError::Config(format!("GRAPHITE_HTTP_TIMEOUT_SECS: not a number: {val}"))
            })?;
        }

        Ok(cfg)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("node_url", &self.node_url)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("wallet_address", &self.wallet_address)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert!(cfg.node_url.is_none());
        assert!(cfg.api_url.is_none());
        assert_eq!(cfg.http_timeout_secs, crate::DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn test_reads_variables() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("GRAPHITE_NODE_URL", "https://anon-entrypoint-1.atgraphite.com"),
            ("GRAPHITE_API_URL", "https://api.main.atgraphite.com/api"),
            ("GRAPHITE_WALLET_ADDRESS", "0x52908400098527886E0F7030069857D2E4169EE7"),
            ("GRAPHITE_HTTP_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            cfg.node_url.as_deref(),
            Some("https://anon-entrypoint-1.atgraphite.com")
        );
        assert_eq!(
            cfg.wallet_address.as_ref().unwrap().as_str(),
            "0x52908400098527886e0f7030069857d2e4169ee7"
        );
        assert_eq!(cfg.http_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_values_ignored() {
        let cfg = ClientConfig::from_lookup(lookup(&[("GRAPHITE_API_URL", "  ")])).unwrap();
        assert!(cfg.api_url.is_none());
    }

    #[test]
    fn test_invalid_wallet_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("GRAPHITE_WALLET_ADDRESS", "alice")]))
            .unwrap_err();
        assert!(matches!(err, GraphiteError::Config(_)));
    }

    #[test]
    fn test_private_key_redacted() {
        let cfg = ClientConfig::from_lookup(lookup(&[("PRIVATE_KEY", "0xdeadbeef")])).unwrap();
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("deadbeef"));
        assert!(shown.contains("<redacted>"));
    }
}
