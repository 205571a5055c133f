//! Graphite client handle
//!
//! A [`GraphiteClient`] is only ever handed out ready to use: the builder
//! refuses to produce one without a provider, so there is no "initialized"
//! flag to check on each call.

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use graphite_common::{Address, GraphiteError, KycLevel, Result, TrustProfile};
use graphite_scoring::{
    assess_lending, assess_marketplace, LendingAssessment, MarketplaceAssessment, TrustReport,
};

use crate::account::{ActivationOutcome, KycOutcome, KycStatus};
use crate::config::ClientConfig;
use crate::explorer::{ExplorerClient, NetworkStats};
use crate::provider::TrustDataProvider;
use crate::KYC_REQUEST_PREFIX;

/// Builder for [`GraphiteClient`]
pub struct GraphiteClientBuilder<P> {
    config: ClientConfig,
    provider: Option<P>,
    explorer: Option<ExplorerClient>,
}

impl<P: TrustDataProvider> GraphiteClientBuilder<P> {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            provider: None,
            explorer: None,
        }
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_provider(mut self, provider: P) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use an explicit explorer client instead of one built from `api_url`
    pub fn with_explorer(mut self, explorer: ExplorerClient) -> Self {
        self.explorer = Some(explorer);
        self
    }

    /// Finish building; fails if no provider was attached
    pub fn build(self) -> Result<GraphiteClient<P>> {
        let provider = self.provider.ok_or_else(|| {
            GraphiteError::NotInitialized("no trust data provider attached".to_string())
        })?;

        let explorer = match (self.explorer, &self.config.api_url) {
            (Some(explorer), _) => Some(explorer),
            (None, Some(url)) => Some(ExplorerClient::new(url, self.config.http_timeout())?),
            (None, None) => None,
        };

        info!(
            wallet = %provider.wallet_address(),
            explorer = explorer.is_some(),
            "Graphite client ready"
        );

        Ok(GraphiteClient {
            provider,
            config: self.config,
            explorer,
        })
    }
}

impl<P: TrustDataProvider> Default for GraphiteClientBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle over a trust data provider
pub struct GraphiteClient<P> {
    provider: P,
    config: ClientConfig,
    explorer: Option<ExplorerClient>,
}

impl<P: TrustDataProvider> GraphiteClient<P> {
    pub fn builder() -> GraphiteClientBuilder<P> {
        GraphiteClientBuilder::new()
    }

    /// Build a client from configuration and a provider in one step
    pub fn connect(config: ClientConfig, provider: P) -> Result<Self> {
        Self::builder()
            .with_config(config)
            .with_provider(provider)
            .build()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn wallet_address(&self) -> &Address {
        self.provider.wallet_address()
    }

    fn subject<'a>(&'a self, address: Option<&'a Address>) -> &'a Address {
        address.unwrap_or_else(|| self.provider.wallet_address())
    }

    // ============ ACCOUNT MANAGEMENT ============

    /// Activate the wallet, unless it is already active
    #[instrument(skip(self), fields(wallet = %self.wallet_address().short()))]
    pub async fn activate_account(&self) -> Result<ActivationOutcome> {
        if self.provider.is_activated(self.wallet_address()).await? {
            info!("Account already activated");
            return Ok(ActivationOutcome::AlreadyActivated);
        }

        info!("Activating account");
        let receipt = self.provider.activate_account().await?;
        info!(%receipt, "Account activated");

        Ok(ActivationOutcome::Activated(receipt))
    }

    /// Fee charged by the activation transaction
    pub async fn activation_fee(&self) -> Result<Decimal> {
        Ok(self.provider.activation_fee().await?)
    }

    // ============ TRUST DATA ============

    /// Fetch the raw profile for `address` (the wallet if `None`)
    ///
    /// The four reads run concurrently; the first failure is returned.
    pub async fn fetch_profile(&self, address: Option<&Address>) -> Result<TrustProfile> {
        let address = self.subject(address);

        let (activated, reputation, kyc_level, filter_level) = tokio::try_join!(
            self.provider.is_activated(address),
            self.provider.reputation(address),
            self.provider.kyc_level(address),
            self.provider.filter_level(address),
        )?;

        Ok(TrustProfile::from_raw(
            address.clone(),
            activated,
            reputation,
            kyc_level,
            filter_level,
        ))
    }

    /// Profile with trust tier and eligible features
    #[instrument(skip(self))]
    pub async fn get_trust_profile(&self, address: Option<&Address>) -> Result<TrustReport> {
        let profile = self.fetch_profile(address).await?;
        let report = TrustReport::from_profile(profile);

        debug!(
            address = %report.profile.address.short(),
            tier = %report.trust_tier,
            features = report.eligible_features.len(),
            "Trust profile fetched"
        );
        Ok(report)
    }

    // ============ KYC MANAGEMENT ============

    /// Request KYC at `level`, unless the wallet already has it
    #[instrument(skip(self), fields(wallet = %self.wallet_address().short()))]
    pub async fn start_kyc(&self, level: KycLevel) -> Result<KycOutcome> {
        let raw = self.provider.kyc_level(self.wallet_address()).await?;
        let current = KycLevel::from_raw(raw);

        if current >= level {
            info!(%current, "KYC level already reached");
            return Ok(KycOutcome::AlreadyAtLevel { current });
        }

        let fee = self.provider.kyc_fee(level).await?;
        info!(%level, %fee, "Submitting KYC request");

        let request_id = format!("{}{}", KYC_REQUEST_PREFIX, Uuid::now_v7().simple());
        let receipt = self.provider.create_kyc_request(&request_id, level).await?;

        Ok(KycOutcome::Submitted {
            level,
            request_id,
            fee,
            receipt,
        })
    }

    /// Current KYC level and the last request made
    pub async fn kyc_status(&self) -> Result<KycStatus> {
        let wallet = self.wallet_address();
        let (raw, last_request) = tokio::try_join!(
            self.provider.kyc_level(wallet),
            self.provider.last_kyc_request(wallet),
        )?;

        Ok(KycStatus::new(KycLevel::from_raw(raw), last_request))
    }

    // ============ TRUST-BASED FEATURES ============

    /// Assess `address` (the wallet if `None`) for a loan
    #[instrument(skip(self))]
    pub async fn assess_lending(
        &self,
        address: Option<&Address>,
        requested_amount: Decimal,
    ) -> Result<LendingAssessment> {
        if requested_amount.is_sign_negative() {
            return Err(GraphiteError::InvalidAmount);
        }

        let profile = self.fetch_profile(address).await?;
        let assessment = assess_lending(&profile, requested_amount);

        match &assessment {
            LendingAssessment::Ineligible { reason } => {
                info!(%reason, "Borrower ineligible");
            }
            LendingAssessment::Offer(offer) => {
                info!(
                    eligible = offer.eligible,
                    approved = %offer.approved_amount,
                    rate = %offer.interest_rate,
                    risk = %offer.risk_level,
                    "Lending assessed"
                );
            }
        }

        Ok(assessment)
    }

    /// Assess `address` (the wallet if `None`) as a marketplace seller
    #[instrument(skip(self))]
    pub async fn assess_marketplace(
        &self,
        address: Option<&Address>,
    ) -> Result<MarketplaceAssessment> {
        let profile = self.fetch_profile(address).await?;
        let assessment = assess_marketplace(&profile);

        info!(
            badge = %assessment.seller_badge,
            max_listing = %assessment.recommended_max_listing_value,
            "Seller assessed"
        );
        Ok(assessment)
    }

    // ============ NETWORK ============

    /// Latest network stats, `None` without an explorer or on any failure
    pub async fn network_stats(&self) -> Option<NetworkStats> {
        match &self.explorer {
            Some(explorer) => explorer.network_stats().await,
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockTrustDataProvider;
    use graphite_common::ProviderError;
    use graphite_scoring::{IneligibleReason, TrustTier};
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn wallet() -> Address {
        Address::from_bytes([0x42; 20])
    }

    fn mock_with_profile(activated: bool, reputation: u64, kyc: u8) -> MockTrustDataProvider {
        let mut mock = MockTrustDataProvider::new();
        mock.expect_wallet_address().return_const(wallet());
        mock.expect_is_activated().returning(move |_| Ok(activated));
        mock.expect_reputation().returning(move |_| Ok(reputation));
        mock.expect_kyc_level().returning(move |_| Ok(kyc));
        mock.expect_filter_level().returning(|_| Ok(0));
        mock
    }

    fn client(mock: MockTrustDataProvider) -> GraphiteClient<MockTrustDataProvider> {
        GraphiteClient::builder().with_provider(mock).build().unwrap()
    }

    #[test]
    fn test_build_without_provider_fails() {
        let result = GraphiteClientBuilder::<MockTrustDataProvider>::new().build();
        assert!(matches!(result, Err(GraphiteError::NotInitialized(_))));
    }

    #[tokio::test]
    async fn test_trust_profile_defaults_to_wallet() {
        let mut mock = MockTrustDataProvider::new();
        mock.expect_wallet_address().return_const(wallet());
        mock.expect_is_activated()
            .with(eq(wallet()))
            .returning(|_| Ok(true));
        mock.expect_reputation()
            .with(eq(wallet()))
            .returning(|_| Ok(780));
        mock.expect_kyc_level().with(eq(wallet())).returning(|_| Ok(2));
        mock.expect_filter_level()
            .with(eq(wallet()))
            .returning(|_| Ok(1));

        let report = client(mock).get_trust_profile(None).await.unwrap();

        assert_eq!(report.profile.address, wallet());
        assert_eq!(report.trust_tier, TrustTier::Excellent);
        assert_eq!(report.profile.filter_level, 1);
        assert_eq!(report.eligible_features.len(), 5);
    }

    #[tokio::test]
    async fn test_read_failure_surfaces_unchanged() {
        let mut mock = MockTrustDataProvider::new();
        mock.expect_wallet_address().return_const(wallet());
        mock.expect_is_activated().returning(|_| Ok(true));
        mock.expect_reputation()
            .times(1)
            .returning(|_| Err(ProviderError::Network("timeout".to_string())));
        mock.expect_kyc_level().returning(|_| Ok(1));
        mock.expect_filter_level().returning(|_| Ok(0));

        let err = client(mock).get_trust_profile(None).await.unwrap_err();
        match err {
            GraphiteError::Provider(ProviderError::Network(msg)) => assert_eq!(msg, "timeout"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_activation_skipped_when_active() {
        let mut mock = mock_with_profile(true, 0, 0);
        mock.expect_activate_account().times(0);

        let outcome = client(mock).activate_account().await.unwrap();
        assert_eq!(outcome, ActivationOutcome::AlreadyActivated);
    }

    #[tokio::test]
    async fn test_activation_revert_surfaces() {
        let mut mock = mock_with_profile(false, 0, 0);
        mock.expect_activate_account()
            .times(1)
            .returning(|| Err(ProviderError::Reverted("fee not paid".to_string())));

        let err = client(mock).activate_account().await.unwrap_err();
        assert!(matches!(err, GraphiteError::Provider(ProviderError::Reverted(_))));
    }

    #[tokio::test]
    async fn test_start_kyc_already_at_level() {
        let mut mock = mock_with_profile(true, 0, 2);
        mock.expect_kyc_fee().times(0);
        mock.expect_create_kyc_request().times(0);

        let outcome = client(mock).start_kyc(KycLevel::EmailVerified).await.unwrap();
        assert_eq!(
            outcome,
            KycOutcome::AlreadyAtLevel {
                current: KycLevel::IdVerified
            }
        );
    }

    #[tokio::test]
    async fn test_start_kyc_submits_request() {
        let mut mock = mock_with_profile(true, 0, 0);
        mock.expect_kyc_fee()
            .with(eq(KycLevel::EmailVerified))
            .returning(|_| Ok(dec!(1)));
        mock.expect_create_kyc_request()
            .withf(|id, level| id.starts_with(KYC_REQUEST_PREFIX) && *level == KycLevel::EmailVerified)
            .times(1)
            .returning(|_, _| Ok(graphite_common::TxReceipt::new("0xabc")));

        let outcome = client(mock).start_kyc(KycLevel::EmailVerified).await.unwrap();
        match outcome {
            KycOutcome::Submitted {
                level,
                request_id,
                fee,
                receipt,
            } => {
                assert_eq!(level, KycLevel::EmailVerified);
                assert!(request_id.starts_with("kyc_"));
                assert_eq!(fee, dec!(1));
                assert_eq!(receipt.tx_hash, "0xabc");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_kyc_status_at_top_level() {
        let mut mock = mock_with_profile(true, 0, 3);
        mock.expect_last_kyc_request().returning(|_| Ok(None));

        let status = client(mock).kyc_status().await.unwrap();
        assert_eq!(status.current_level, KycLevel::VideoVerified);
        assert!(!status.can_upgrade);
        assert_eq!(status.next_level, None);
    }

    #[tokio::test]
    async fn test_assess_lending_for_other_address() {
        let borrower = Address::from_bytes([0x99; 20]);
        let mut mock = MockTrustDataProvider::new();
        mock.expect_wallet_address().return_const(wallet());
        mock.expect_is_activated()
            .with(eq(borrower.clone()))
            .returning(|_| Ok(true));
        mock.expect_reputation().returning(|_| Ok(600));
        mock.expect_kyc_level().returning(|_| Ok(1));
        mock.expect_filter_level().returning(|_| Ok(0));

        let assessment = client(mock)
            .assess_lending(Some(&borrower), dec!(5000))
            .await
            .unwrap();

        let offer = assessment.offer().expect("offer");
        assert!(offer.eligible);
        assert_eq!(offer.max_loan_amount, dec!(12000));
        assert_eq!(offer.interest_rate.to_string(), "4.50%");
    }

    #[tokio::test]
    async fn test_assess_lending_inactive() {
        let assessment = client(mock_with_profile(false, 900, 3))
            .assess_lending(None, dec!(100))
            .await
            .unwrap();
        assert_eq!(
            assessment.ineligible_reason(),
            Some(IneligibleReason::ActivationRequired)
        );
    }

    #[tokio::test]
    async fn test_assess_lending_rejects_negative_amount() {
        let mut mock = MockTrustDataProvider::new();
        mock.expect_wallet_address().return_const(wallet());
        mock.expect_is_activated().times(0);

        let err = client(mock)
            .assess_lending(None, dec!(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, GraphiteError::InvalidAmount));
    }

    #[tokio::test]
    async fn test_network_stats_without_explorer() {
        let client = client(mock_with_profile(true, 0, 0));
        assert!(client.network_stats().await.is_none());
    }
}
