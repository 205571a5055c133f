//! Trust report - a profile with its derived tier and features

use serde::{Deserialize, Serialize};

use graphite_common::TrustProfile;

use crate::features::{eligible_features, Feature};
use crate::tier::{classify_trust, TrustTier};

/// Profile plus the decisions that depend on nothing but the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustReport {
    #[serde(flatten)]
    pub profile: TrustProfile,
    pub trust_tier: TrustTier,
    pub eligible_features: Vec<Feature>,
}

impl TrustReport {
    pub fn from_profile(profile: TrustProfile) -> Self {
        let trust_tier = classify_trust(profile.reputation, profile.kyc());
        let eligible_features =
            eligible_features(profile.reputation, profile.kyc(), profile.activated);

        Self {
            profile,
            trust_tier,
            eligible_features,
        }
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.eligible_features.contains(&feature)
    }
}

impl From<TrustProfile> for TrustReport {
    fn from(profile: TrustProfile) -> Self {
        Self::from_profile(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphite_common::Address;

    #[test]
    fn test_report_derives_tier_and_features() {
        let profile = TrustProfile::from_raw(Address::from_bytes([3; 20]), true, 520, 1, 0);
        let report = TrustReport::from_profile(profile);

        assert_eq!(report.trust_tier, TrustTier::Good);
        assert!(report.has_feature(Feature::BasicTrading));
        assert!(report.has_feature(Feature::Lending));
        assert!(report.has_feature(Feature::PremiumRates));
        assert!(!report.has_feature(Feature::AdvancedTrading));
    }

    #[test]
    fn test_report_flattens_profile() {
        let profile = TrustProfile::from_raw(Address::from_bytes([3; 20]), false, 10, 0, 1);
        let json = serde_json::to_value(TrustReport::from(profile)).unwrap();

        assert_eq!(json["reputation"], 10);
        assert_eq!(json["filter_level"], 1);
        assert_eq!(json["trust_tier"], "New");
    }
}
