//! Address - Account identifier on the Graphite network
//!
//! Addresses are validated once at the boundary and normalized to lowercase.
//! Scoring never looks inside them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GraphiteError;

/// Number of raw bytes in an account address
pub const ADDRESS_BYTES: usize = 20;

/// Validated, lowercase `0x`-prefixed account address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and normalize an address string
    pub fn parse(input: &str) -> Result<Self, GraphiteError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| GraphiteError::InvalidAddress(format!("missing 0x prefix: {trimmed}")))?;

        let bytes = hex::decode(digits)
            .map_err(|e| GraphiteError::InvalidAddress(format!("{trimmed}: {e}")))?;

        if bytes.len() != ADDRESS_BYTES {
            return Err(GraphiteError::InvalidAddress(format!(
                "{trimmed}: expected {ADDRESS_BYTES} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Self(format!("0x{}", hex::encode(bytes))))
    }

    /// Build an address from raw bytes
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for log lines (`0x1234…abcd`)
    pub fn short(&self) -> String {
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = GraphiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = GraphiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
