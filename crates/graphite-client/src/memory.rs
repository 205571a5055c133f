//! In-memory trust data provider
//!
//! Stands in for a node client in tests and demos. Accounts that were never
//! seeded read as zero, the way an unknown address reads on chain.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use graphite_common::{Address, KycLevel, KycRequest, KycRequestStatus, ProviderError, TxReceipt};

use crate::provider::TrustDataProvider;

/// Default activation fee in native tokens
pub const DEFAULT_ACTIVATION_FEE: Decimal = Decimal::ONE;

/// First block number handed out
pub const GENESIS_BLOCK: u64 = 1;

/// Mutable per-account state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub activated: bool,
    pub reputation: u64,
    /// Raw level, may be out of range to exercise clamping
    pub kyc_level: u8,
    pub filter_level: u8,
    /// Native token balance used to pay fees
    pub balance: Decimal,
    pub last_kyc_request: Option<KycRequest>,
}

impl AccountState {
    /// Account with the given trust signals and no balance
    pub fn new(activated: bool, reputation: u64, kyc_level: u8) -> Self {
        Self {
            activated,
            reputation,
            kyc_level,
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }
}

/// DashMap-backed provider with a single signing wallet
pub struct InMemoryTrustProvider {
    wallet: Address,
    accounts: DashMap<Address, AccountState>,
    activation_fee: Decimal,
    kyc_fees: [Decimal; 4],
    block_number: AtomicU64,
    tx_nonce: AtomicU64,
    /// Error returned by the next call, then cleared
    next_failure: Mutex<Option<ProviderError>>,
}

impl InMemoryTrustProvider {
    /// Create a provider whose wallet starts as a fresh, empty account
    pub fn new(wallet: Address) -> Self {
        Self {
            wallet,
            accounts: DashMap::new(),
            activation_fee: DEFAULT_ACTIVATION_FEE,
            kyc_fees: Self::default_kyc_fees(),
            block_number: AtomicU64::new(GENESIS_BLOCK),
            tx_nonce: AtomicU64::new(0),
            next_failure: Mutex::new(None),
        }
    }

    fn default_kyc_fees() -> [Decimal; 4] {
        [
            Decimal::ZERO,
            Decimal::ONE,
            Decimal::from(5),
            Decimal::from(10),
        ]
    }

    /// Seed or replace an account
    pub fn with_account(self, address: Address, state: AccountState) -> Self {
        self.accounts.insert(address, state);
        self
    }

    pub fn with_activation_fee(mut self, fee: Decimal) -> Self {
        self.activation_fee = fee;
        self
    }

    pub fn with_kyc_fee(mut self, level: KycLevel, fee: Decimal) -> Self {
        self.kyc_fees[level.as_u8() as usize] = fee;
        self
    }

    /// Replace an account after construction
    pub fn set_account(&self, address: Address, state: AccountState) {
        self.accounts.insert(address, state);
    }

    /// Current state of an account (zeroed if never seen)
    pub fn account(&self, address: &Address) -> AccountState {
        self.accounts
            .get(address)
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    /// Make the next provider call fail with `error`
    pub fn fail_next(&self, error: ProviderError) {
        *self.next_failure.lock() = Some(error);
    }

    /// Settle the wallet's pending KYC request, raising its level on approval
    pub fn resolve_kyc(&self, address: &Address, approved: bool) -> Option<KycLevel> {
        let mut account = self.accounts.get_mut(address)?;
        let request = account.last_kyc_request.as_mut()?;

        request.status = if approved {
            KycRequestStatus::Approved
        } else {
            KycRequestStatus::Rejected
        };
        let level = request.level;

        if approved {
            account.kyc_level = account.kyc_level.max(level.as_u8());
        }
        Some(level)
    }

    /// Latest block number produced
    pub fn block_number(&self) -> u64 {
        self.block_number.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        match self.next_failure.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Charge a fee against the wallet and mine a receipt
    ///
    /// `precondition` and `apply` run under the same entry guard.
    fn submit(
        &self,
        fee: Decimal,
        precondition: impl FnOnce(&AccountState) -> Result<(), ProviderError>,
        apply: impl FnOnce(&mut AccountState),
    ) -> Result<TxReceipt, ProviderError> {
        let mut account = self.accounts.entry(self.wallet.clone()).or_default();

        precondition(&account)?;

        if account.balance < fee {
            return Err(ProviderError::InsufficientFunds {
                fee: fee.to_string(),
                balance: account.balance.to_string(),
            });
        }

        account.balance -= fee;
        apply(&mut *account);

        let nonce = self.tx_nonce.fetch_add(1, Ordering::SeqCst) + 1;
        let block = self.block_number.fetch_add(1, Ordering::SeqCst) + 1;
        let receipt = TxReceipt::new(format!("0x{nonce:064x}")).in_block(block);

        debug!(wallet = %self.wallet.short(), %receipt, "Transaction mined");
        Ok(receipt)
    }
}

#[async_trait]
impl TrustDataProvider for InMemoryTrustProvider {
    fn wallet_address(&self) -> &Address {
        &self.wallet
    }

    async fn is_activated(&self, address: &Address) -> Result<bool, ProviderError> {
        self.check_failure()?;
        Ok(self.account(address).activated)
    }

    async fn reputation(&self, address: &Address) -> Result<u64, ProviderError> {
        self.check_failure()?;
        Ok(self.account(address).reputation)
    }

    async fn kyc_level(&self, address: &Address) -> Result<u8, ProviderError> {
        self.check_failure()?;
        Ok(self.account(address).kyc_level)
    }

    async fn filter_level(&self, address: &Address) -> Result<u8, ProviderError> {
        self.check_failure()?;
        Ok(self.account(address).filter_level)
    }

    async fn last_kyc_request(
        &self,
        address: &Address,
    ) -> Result<Option<KycRequest>, ProviderError> {
        self.check_failure()?;
        Ok(self.account(address).last_kyc_request)
    }

    async fn activation_fee(&self) -> Result<Decimal, ProviderError> {
        self.check_failure()?;
        Ok(self.activation_fee)
    }

    async fn kyc_fee(&self, level: KycLevel) -> Result<Decimal, ProviderError> {
        self.check_failure()?;
        Ok(self.kyc_fees[level.as_u8() as usize])
    }

    async fn activate_account(&self) -> Result<TxReceipt, ProviderError> {
        self.check_failure()?;

        self.submit(
            self.activation_fee,
            |account| {
                if account.activated {
                    return Err(ProviderError::Reverted("account already activated".to_string()));
                }
                Ok(())
            },
            |account| account.activated = true,
        )
    }

    async fn create_kyc_request(
        &self,
        request_id: &str,
        level: KycLevel,
    ) -> Result<TxReceipt, ProviderError> {
        self.check_failure()?;

        let request = KycRequest {
            request_id: request_id.to_string(),
            level,
            status: KycRequestStatus::Pending,
            submitted_at: chrono::Utc::now().timestamp_millis(),
        };

        self.submit(
            self.kyc_fees[level.as_u8() as usize],
            |account| {
                if !account.activated {
                    return Err(ProviderError::Reverted("account not activated".to_string()));
                }
                Ok(())
            },
            move |account| account.last_kyc_request = Some(request),
        )
    }
}
