//! # Graphite Scoring
//!
//! Deterministic trust policy over a [`TrustProfile`].
//!
//! Every function here is pure: no I/O, no shared state, defined for every
//! input. They can be called from any thread and tested with synthetic
//! profiles.
//!
//! ## Decisions
//!
//! - [`classify_trust`]: Excellent / Good / Building / New
//! - [`eligible_features`]: additive feature set
//! - [`assess_lending`]: loan cap, interest rate, risk level, counter-offer
//! - [`assess_marketplace`]: seller badge, high-value flag, listing cap
//!
//! All thresholds and literal amounts live in [`policy`].
//!
//! [`TrustProfile`]: graphite_common::TrustProfile

pub mod features;
pub mod lending;
pub mod marketplace;
pub mod policy;
pub mod report;
pub mod tier;

pub use features::{eligible_features, Feature};
pub use lending::{
    assess_lending, assess_risk, IneligibleReason, InterestRate, LendingAssessment, LendingOffer,
    RiskLevel,
};
pub use marketplace::{assess_marketplace, ListingLimit, MarketplaceAssessment, SellerBadge};
pub use report::TrustReport;
pub use tier::{classify_trust, TrustTier};
