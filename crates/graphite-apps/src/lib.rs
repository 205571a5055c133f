//! # Graphite Apps
//!
//! Two small applications built on [`GraphiteClient`](graphite_client::GraphiteClient):
//!
//! - [`TrustLendingApp`]: approves loans out of a fixed pool using trust-priced terms
//! - [`TrustMarketplace`]: gates high-value listings on seller verification

pub mod lending;
pub mod marketplace;

pub use lending::{LoanApplication, LoanDecision, TrustLendingApp};
pub use marketplace::{ListingDecision, TrustMarketplace};

/// Default size of the lending pool, dollars
pub const DEFAULT_LOAN_POOL: u64 = 1_000_000;

/// Listings above this value need high-value clearance, dollars
pub const HIGH_VALUE_LISTING_THRESHOLD: u64 = 10_000;
