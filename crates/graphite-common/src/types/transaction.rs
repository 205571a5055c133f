//! Transaction references returned by provider writes

use serde::{Deserialize, Serialize};

/// Reference to a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Transaction hash (`0x`-prefixed)
    pub tx_hash: String,

    /// Block the transaction was included in, if the provider waited for it
    pub block_number: Option<u64>,
}

impl TxReceipt {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number: None,
        }
    }

    pub fn in_block(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    pub fn is_mined(&self) -> bool {
        self.block_number.is_some()
    }
}

impl std::fmt::Display for TxReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.block_number {
            Some(block) => write!(f, "{} (block {})", self.tx_hash, block),
            None => write!(f, "{} (pending)", self.tx_hash),
        }
    }
}
