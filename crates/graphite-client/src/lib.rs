//! # Graphite Client
//!
//! Ready-to-use handle over a Graphite node client and the trust protocol.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   GraphiteClient                     │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐   │
//! │  │  Account    │  │   Trust     │  │  Network    │   │
//! │  │  & KYC      │  │  Profiles   │  │  Stats      │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘   │
//! │         │                │                │          │
//! │         │         ┌──────┴──────┐         │          │
//! │         │         │   scoring   │         │          │
//! │         │         │   (pure)    │         │          │
//! │         │         └──────┬──────┘         │          │
//! │  ┌──────┴────────────────┴──────┐  ┌──────┴──────┐   │
//! │  │      TrustDataProvider       │  │  Explorer   │   │
//! │  │  (node client + plugin)      │  │  HTTP API   │   │
//! │  └──────────────────────────────┘  └─────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The provider does all chain work (signing, submission, contract reads).
//! The client fans reads out concurrently, normalizes them into a
//! [`TrustProfile`](graphite_common::TrustProfile) and hands it to
//! [`graphite_scoring`].

pub mod account;
pub mod client;
pub mod config;
pub mod explorer;
pub mod memory;
pub mod provider;

pub use account::{ActivationOutcome, KycOutcome, KycStatus};
pub use client::{GraphiteClient, GraphiteClientBuilder};
pub use config::ClientConfig;
pub use explorer::{ExplorerClient, NetworkStats};
pub use memory::{AccountState, InMemoryTrustProvider};
pub use provider::TrustDataProvider;

/// Prefix for generated KYC request ids
pub const KYC_REQUEST_PREFIX: &str = "kyc_";

/// Default timeout for explorer HTTP requests
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
