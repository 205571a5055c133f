//! # Graphite Common
//!
//! Shared types and errors for the Graphite trust wrapper.
//!
//! ## Core Types
//!
//! - [`Address`]: validated account identifier (`0x` + 40 hex digits)
//! - [`TrustProfile`]: activation, reputation and KYC level for one account
//! - [`KycLevel`]: verification tier, 0 (unverified) to 3 (video verified)
//! - [`TxReceipt`]: transaction reference returned by provider writes
//!
//! ## Errors
//!
//! - [`GraphiteError`]: unified error for client operations
//! - [`ProviderError`]: failures reported by the trust data provider

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{GraphiteError, ProviderError, Result};
pub use types::{
    address::Address,
    kyc::{KycLevel, KycRequest, KycRequestStatus},
    transaction::TxReceipt,
    trust_profile::TrustProfile,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest KYC level the protocol issues
pub const MAX_KYC_LEVEL: u8 = 3;
