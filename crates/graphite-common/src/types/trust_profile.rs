//! TrustProfile - Snapshot of an account's on-chain trust signals
//!
//! A profile is rebuilt on every query and never stored. It is the only input
//! the scoring functions need besides a requested amount:
//! - activation gates lending entirely
//! - reputation drives tiers, loan size and risk premium
//! - KYC level drives tiers, loan size and rate discount
//! - filter level is carried along untouched

use serde::{Deserialize, Serialize};

use super::{address::Address, kyc::KycLevel};

/// Trust signals for one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustProfile {
    /// Account the signals belong to
    pub address: Address,

    /// Whether the one-time activation transaction has been made
    pub activated: bool,

    /// Accumulated on-chain reputation (observed 0-1000+)
    pub reputation: u64,

    /// Verification tier
    pub kyc_level: KycLevel,

    /// Transaction filter level, not used for scoring
    pub filter_level: u8,
}

impl TrustProfile {
    /// Build a profile from raw provider values, clamping the KYC level
    pub fn from_raw(
        address: Address,
        activated: bool,
        reputation: u64,
        kyc_level: u8,
        filter_level: u8,
    ) -> Self {
        Self {
            address,
            activated,
            reputation,
            kyc_level: KycLevel::from_raw(kyc_level),
            filter_level,
        }
    }

    /// KYC level as the integer the scoring thresholds compare against
    #[inline]
    pub fn kyc(&self) -> u8 {
        self.kyc_level.as_u8()
    }
}

impl std::fmt::Display for TrustProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrustProfile({}, activated={}, reputation={}, kyc={})",
            self.address.short(),
            self.activated,
            self.reputation,
            self.kyc()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_clamps_kyc() {
        let profile = TrustProfile::from_raw(Address::from_bytes([1; 20]), true, 640, 7, 2);
        assert_eq!(profile.kyc_level, KycLevel::VideoVerified);
        assert_eq!(profile.kyc(), 3);
        assert_eq!(profile.filter_level, 2);
    }

    #[test]
    fn test_display() {
        let profile = TrustProfile::from_raw(Address::from_bytes([0xcd; 20]), false, 10, 0, 0);
        let shown = profile.to_string();
        assert!(shown.contains("reputation=10"));
        assert!(shown.contains("activated=false"));
    }
}
