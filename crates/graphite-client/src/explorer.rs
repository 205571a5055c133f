//! Explorer API client
//!
//! Thin wrapper over the Graphite block explorer's Etherscan-style API.
//! Only used for network stats, which are best-effort.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use graphite_common::{GraphiteError, Result};

/// Snapshot of network state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub latest_block: u64,
}

/// Explorer response envelope (`status` is "1" on success)
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
}

/// HTTP client for the explorer API
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExplorerClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GraphiteError::Explorer(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest block number reported by the explorer
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn latest_block(&self) -> Result<u64> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("module", "block"), ("action", "getlatestblockno")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GraphiteError::Explorer(format!("Request failed: {e}")))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GraphiteError::Explorer(format!("Failed to read response body: {e}")))?;
        let body: ExplorerResponse = serde_json::from_slice(&bytes)?;

        if body.status != "1" {
            return Err(GraphiteError::Explorer(format!(
                "Explorer returned status {}: {}",
                body.status,
                body.message.unwrap_or_default()
            )));
        }

        let raw = body
            .result
            .as_str()
            .ok_or_else(|| GraphiteError::Explorer(format!("Unexpected result: {}", body.result)))?;

        let block = parse_block_number(raw)?;
        debug!(block, "Fetched latest block");
        Ok(block)
    }

    /// Network stats, or `None` if the explorer can't be reached or refuses
    pub async fn network_stats(&self) -> Option<NetworkStats> {
        match self.latest_block().await {
            Ok(latest_block) => Some(NetworkStats { latest_block }),
            Err(e) => {
                warn!(error = %e, "Network stats unavailable");
                None
            }
        }
    }
}

/// Parse a hex block number, with or without a `0x` prefix
pub fn parse_block_number(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    u64::from_str_radix(digits, 16)
        .map_err(|e| GraphiteError::Explorer(format!("Invalid block number {raw:?}: {e}")))
}
