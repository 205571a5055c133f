//! Marketplace assessment - Seller badges and listing caps
//!
//! Badges and caps step on the same thresholds as the trust tiers. There is
//! no gating: every profile gets an assessment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use graphite_common::{KycLevel, TrustProfile};

use crate::policy::{
    HIGH_VALUE_KYC, HIGH_VALUE_REPUTATION, MINIMAL_LISTING_CAP, NEW_SELLER_LISTING_CAP,
    VERIFIED_LISTING_CAP,
};
use crate::tier::{classify_trust, TrustTier};

/// Seller badge shown next to listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SellerBadge {
    BuildReputation,
    NewSeller,
    VerifiedSeller,
    TrustedSeller,
}

impl SellerBadge {
    pub fn for_tier(tier: TrustTier) -> Self {
        match tier {
            TrustTier::Excellent => SellerBadge::TrustedSeller,
            TrustTier::Good => SellerBadge::VerifiedSeller,
            TrustTier::Building => SellerBadge::NewSeller,
            TrustTier::New => SellerBadge::BuildReputation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SellerBadge::TrustedSeller => "Trusted Seller",
            SellerBadge::VerifiedSeller => "Verified Seller",
            SellerBadge::NewSeller => "New Seller",
            SellerBadge::BuildReputation => "Build Reputation",
        }
    }

    /// Only the lowest badge is a warning
    pub fn is_warning(self) -> bool {
        self == SellerBadge::BuildReputation
    }
}

impl std::fmt::Display for SellerBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended maximum value for a single listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingLimit {
    Unlimited,
    /// Cap in whole dollars
    Capped(u64),
}

impl ListingLimit {
    pub fn for_tier(tier: TrustTier) -> Self {
        match tier {
            TrustTier::Excellent => ListingLimit::Unlimited,
            TrustTier::Good => ListingLimit::Capped(VERIFIED_LISTING_CAP),
            TrustTier::Building => ListingLimit::Capped(NEW_SELLER_LISTING_CAP),
            TrustTier::New => ListingLimit::Capped(MINIMAL_LISTING_CAP),
        }
    }

    /// Whether a listing of this value fits under the limit
    pub fn allows(&self, value: Decimal) -> bool {
        match self {
            ListingLimit::Unlimited => true,
            ListingLimit::Capped(cap) => value <= Decimal::from(*cap),
        }
    }
}

impl std::fmt::Display for ListingLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingLimit::Unlimited => f.write_str("Unlimited"),
            ListingLimit::Capped(cap) => write!(f, "${}", group_thousands(*cap)),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Seller-facing view of a trust profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceAssessment {
    pub seller_badge: SellerBadge,
    /// Reputation the assessment was computed from
    pub trust_score: u64,
    /// Serialized as its description, e.g. "ID Verified"
    #[serde(with = "kyc_description")]
    pub verification_level: KycLevel,
    pub can_sell_high_value: bool,
    pub recommended_max_listing_value: ListingLimit,
}

impl MarketplaceAssessment {
    /// KYC description for display
    pub fn verification_description(&self) -> &'static str {
        self.verification_level.description()
    }
}

mod kyc_description {
    use graphite_common::KycLevel;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(level: &KycLevel, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(level.description())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<KycLevel, D::Error> {
        let description = String::deserialize(deserializer)?;
        KycLevel::ALL
            .into_iter()
            .find(|level| level.description() == description)
            .ok_or_else(|| D::Error::custom(format!("unknown verification level: {description}")))
    }
}

/// Assess a seller
pub fn assess_marketplace(profile: &TrustProfile) -> MarketplaceAssessment {
    let tier = classify_trust(profile.reputation, profile.kyc());

    MarketplaceAssessment {
        seller_badge: SellerBadge::for_tier(tier),
        trust_score: profile.reputation,
        verification_level: profile.kyc_level,
        can_sell_high_value: profile.reputation >= HIGH_VALUE_REPUTATION
            && profile.kyc() >= HIGH_VALUE_KYC,
        recommended_max_listing_value: ListingLimit::for_tier(tier),
    }
}
