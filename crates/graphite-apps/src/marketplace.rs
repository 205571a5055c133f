//! Verified-seller marketplace

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument, warn};

use graphite_client::{GraphiteClient, TrustDataProvider};
use graphite_common::{Address, Result};
use graphite_scoring::{MarketplaceAssessment, SellerBadge};

/// Outcome of a listing attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ListingDecision {
    Approved { badge: SellerBadge },
    Restricted { reason: String },
}

impl ListingDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, ListingDecision::Approved { .. })
    }
}

/// Marketplace over a Graphite client
pub struct TrustMarketplace<P> {
    client: GraphiteClient<P>,
}

impl<P: TrustDataProvider> TrustMarketplace<P> {
    pub fn new(client: GraphiteClient<P>) -> Self {
        info!("TrustMarket initialized");
        Self { client }
    }

    pub fn client(&self) -> &GraphiteClient<P> {
        &self.client
    }

    /// Seller profile as shown next to listings
    pub async fn seller_profile(&self, seller: &Address) -> Result<MarketplaceAssessment> {
        let assessment = self.client.assess_marketplace(Some(seller)).await?;

        info!(
            seller = %seller.short(),
            badge = %assessment.seller_badge,
            trust_score = assessment.trust_score,
            verification = assessment.verification_description(),
            max_listing = %assessment.recommended_max_listing_value,
            high_value_sales = assessment.can_sell_high_value,
            "Seller profile"
        );
        Ok(assessment)
    }

    /// List an item, refusing high-value items from sellers without clearance
    #[instrument(skip(self), fields(seller = %seller.short()))]
    pub async fn create_listing(
        &self,
        seller: &Address,
        item_value: Decimal,
        item_name: &str,
    ) -> Result<ListingDecision> {
        let profile = self.seller_profile(seller).await?;

        if item_value > Decimal::from(crate::HIGH_VALUE_LISTING_THRESHOLD)
            && !profile.can_sell_high_value
        {
            warn!(item_name, %item_value, "Listing restricted: ID verification needed for high-value items");
            return Ok(ListingDecision::Restricted {
                reason: "Verification required for high-value items".to_string(),
            });
        }

        info!(item_name, %item_value, badge = %profile.seller_badge, "Listing approved");
        Ok(ListingDecision::Approved {
            badge: profile.seller_badge,
        })
    }
}
