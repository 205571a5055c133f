//! Trust Data Provider
//!
//! The seam between this crate and the chain. An implementation wraps a node
//! client with the Graphite protocol plugin; this crate never signs or
//! submits anything itself.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use graphite_common::{Address, KycLevel, KycRequest, ProviderError, TxReceipt};

/// Read and write access to Graphite trust data
///
/// Reads are independent and may run concurrently. Writes act on behalf of
/// [`wallet_address`](Self::wallet_address). Errors are returned as-is and
/// are never retried by callers in this crate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrustDataProvider: Send + Sync {
    /// Address of the signing wallet, the default subject of every query
    fn wallet_address(&self) -> &Address;

    /// Whether the account has made its activation transaction
    async fn is_activated(&self, address: &Address) -> Result<bool, ProviderError>;

    /// On-chain reputation score
    async fn reputation(&self, address: &Address) -> Result<u64, ProviderError>;

    /// Raw KYC level (expected 0..=3)
    async fn kyc_level(&self, address: &Address) -> Result<u8, ProviderError>;

    /// Transaction filter level
    async fn filter_level(&self, address: &Address) -> Result<u8, ProviderError>;

    /// Most recent KYC request for the account, if any
    async fn last_kyc_request(&self, address: &Address)
        -> Result<Option<KycRequest>, ProviderError>;

    /// Fee charged by the activation transaction
    async fn activation_fee(&self) -> Result<Decimal, ProviderError>;

    /// Fee charged by a KYC request at the given level
    async fn kyc_fee(&self, level: KycLevel) -> Result<Decimal, ProviderError>;

    /// Submit the activation transaction for the wallet
    async fn activate_account(&self) -> Result<TxReceipt, ProviderError>;

    /// Submit a KYC request for the wallet
    async fn create_kyc_request(
        &self,
        request_id: &str,
        level: KycLevel,
    ) -> Result<TxReceipt, ProviderError>;
}

#[async_trait]
impl<P: TrustDataProvider + ?Sized> TrustDataProvider for Arc<P> {
    fn wallet_address(&self) -> &Address {
        (**self).wallet_address()
    }

    async fn is_activated(&self, address: &Address) -> Result<bool, ProviderError> {
        (**self).is_activated(address).await
    }

    async fn reputation(&self, address: &Address) -> Result<u64, ProviderError> {
        (**self).reputation(address).await
    }

    async fn kyc_level(&self, address: &Address) -> Result<u8, ProviderError> {
        (**self).kyc_level(address).await
    }

    async fn filter_level(&self, address: &Address) -> Result<u8, ProviderError> {
        (**self).filter_level(address).await
    }

    async fn last_kyc_request(
        &self,
        address: &Address,
    ) -> Result<Option<KycRequest>, ProviderError> {
        (**self).last_kyc_request(address).await
    }

    async fn activation_fee(&self) -> Result<Decimal, ProviderError> {
        (**self).activation_fee().await
    }

    async fn kyc_fee(&self, level: KycLevel) -> Result<Decimal, ProviderError> {
        (**self).kyc_fee(level).await
    }

    async fn activate_account(&self) -> Result<TxReceipt, ProviderError> {
        (**self).activate_account().await
    }

    async fn create_kyc_request(
        &self,
        request_id: &str,
        level: KycLevel,
    ) -> Result<TxReceipt, ProviderError> {
        (**self).create_kyc_request(request_id, level).await
    }
}
