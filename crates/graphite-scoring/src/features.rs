//! Feature eligibility
//!
//! Features are additive: an account collects every feature whose condition
//! it meets.

use serde::{Deserialize, Serialize};

use crate::policy::{ADVANCED_TRADING_KYC, LENDING_FEATURE_KYC, PREMIUM_RATES_REPUTATION};

/// Product feature gated on trust signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    BasicTrading,
    Lending,
    Borrowing,
    AdvancedTrading,
    PremiumRates,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::BasicTrading => "Basic Trading",
            Feature::Lending => "Lending",
            Feature::Borrowing => "Borrowing",
            Feature::AdvancedTrading => "Advanced Trading",
            Feature::PremiumRates => "Premium Rates",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Features an account qualifies for, in a stable order
pub fn eligible_features(reputation: u64, kyc_level: u8, activated: bool) -> Vec<Feature> {
    let mut features = Vec::with_capacity(5);

    if activated {
        features.push(Feature::BasicTrading);
    }
    if kyc_level >= LENDING_FEATURE_KYC {
        features.extend([Feature::Lending, Feature::Borrowing]);
    }
    if kyc_level >= ADVANCED_TRADING_KYC {
        features.push(Feature::AdvancedTrading);
    }
    if reputation >= PREMIUM_RATES_REPUTATION {
        features.push(Feature::PremiumRates);
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_features_for_fresh_account() {
        assert!(eligible_features(0, 0, false).is_empty());
    }

    #[test]
    fn test_activation_only() {
        assert_eq!(eligible_features(100, 0, true), vec![Feature::BasicTrading]);
    }

    #[test]
    fn test_all_features() {
        assert_eq!(
            eligible_features(800, 2, true),
            vec![
                Feature::BasicTrading,
                Feature::Lending,
                Feature::Borrowing,
                Feature::AdvancedTrading,
                Feature::PremiumRates,
            ]
        );
    }

    #[test]
    fn test_features_do_not_require_activation() {
        // KYC and reputation features stand on their own
        assert_eq!(
            eligible_features(500, 1, false),
            vec![Feature::Lending, Feature::Borrowing, Feature::PremiumRates]
        );
    }

    #[test]
    fn test_premium_rates_threshold() {
        assert!(!eligible_features(499, 0, true).contains(&Feature::PremiumRates));
        assert!(eligible_features(500, 0, true).contains(&Feature::PremiumRates));
    }

    #[test]
    fn test_advanced_trading_threshold() {
        assert_eq!(
            eligible_features(0, 2, false),
            vec![Feature::Lending, Feature::Borrowing, Feature::AdvancedTrading]
        );
        assert!(!eligible_features(0, 1, true).contains(&Feature::AdvancedTrading));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = eligible_features(900, 3, true)
            .into_iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(
            labels,
            ["Basic Trading", "Lending", "Borrowing", "Advanced Trading", "Premium Rates"]
        );
    }
}
