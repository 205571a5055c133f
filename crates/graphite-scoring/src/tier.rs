//! Trust tiers
//!
//! Checks run top-down and the first match wins:
//! - Excellent: reputation >= 750 and KYC >= 2
//! - Good: reputation >= 500 and KYC >= 1
//! - Building: reputation >= 250
//! - New: everything else

use serde::{Deserialize, Serialize};

use crate::policy::{
    BUILDING_REPUTATION, EXCELLENT_KYC, EXCELLENT_REPUTATION, GOOD_KYC, GOOD_REPUTATION,
};

/// Coarse trust classification, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustTier {
    New,
    Building,
    Good,
    Excellent,
}

impl TrustTier {
    pub fn label(self) -> &'static str {
        match self {
            TrustTier::New => "New",
            TrustTier::Building => "Building",
            TrustTier::Good => "Good",
            TrustTier::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a reputation / KYC pair into a trust tier
#[inline]
pub fn classify_trust(reputation: u64, kyc_level: u8) -> TrustTier {
    if reputation >= EXCELLENT_REPUTATION && kyc_level >= EXCELLENT_KYC {
        TrustTier::Excellent
    } else if reputation >= GOOD_REPUTATION && kyc_level >= GOOD_KYC {
        TrustTier::Good
    } else if reputation >= BUILDING_REPUTATION {
        TrustTier::Building
    } else {
        TrustTier::New
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_trust(750, 2), TrustTier::Excellent);
        assert_eq!(classify_trust(749, 2), TrustTier::Good);
        assert_eq!(classify_trust(750, 1), TrustTier::Good);
        assert_eq!(classify_trust(500, 1), TrustTier::Good);
        assert_eq!(classify_trust(499, 1), TrustTier::Building);
        assert_eq!(classify_trust(500, 0), TrustTier::Building);
        assert_eq!(classify_trust(250, 0), TrustTier::Building);
        assert_eq!(classify_trust(249, 3), TrustTier::New);
        assert_eq!(classify_trust(0, 0), TrustTier::New);
    }

    #[test]
    fn test_high_reputation_without_kyc_stays_building() {
        assert_eq!(classify_trust(1_000, 0), TrustTier::Building);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TrustTier::Excellent.to_string(), "Excellent");
        assert_eq!(TrustTier::New.to_string(), "New");
    }

    proptest! {
        #[test]
        fn prop_excellent_above_thresholds(reputation in 750u64..100_000, kyc in 2u8..=3) {
            prop_assert_eq!(classify_trust(reputation, kyc), TrustTier::Excellent);
        }

        #[test]
        fn prop_monotonic_in_reputation(reputation in 0u64..2_000, bump in 0u64..2_000, kyc in 0u8..=3) {
            prop_assert!(classify_trust(reputation + bump, kyc) >= classify_trust(reputation, kyc));
        }

        #[test]
        fn prop_monotonic_in_kyc(reputation in 0u64..2_000, kyc in 0u8..=3, bump in 0u8..=3) {
            let raised = (kyc + bump).min(3);
            prop_assert!(classify_trust(reputation, raised) >= classify_trust(reputation, kyc));
        }
    }
}
