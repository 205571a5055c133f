//! Outcomes of account and KYC operations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use graphite_common::{KycLevel, KycRequest, TxReceipt};

/// Result of [`GraphiteClient::activate_account`](crate::GraphiteClient::activate_account)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// Nothing submitted, the wallet was already active
    AlreadyActivated,
    Activated(TxReceipt),
}

impl ActivationOutcome {
    pub fn receipt(&self) -> Option<&TxReceipt> {
        match self {
            ActivationOutcome::Activated(receipt) => Some(receipt),
            ActivationOutcome::AlreadyActivated => None,
        }
    }
}

/// Result of [`GraphiteClient::start_kyc`](crate::GraphiteClient::start_kyc)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KycOutcome {
    /// Nothing submitted, the wallet is already at or above the requested level
    AlreadyAtLevel { current: KycLevel },
    Submitted {
        level: KycLevel,
        request_id: String,
        fee: Decimal,
        receipt: TxReceipt,
    },
}

impl KycOutcome {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            KycOutcome::Submitted { request_id, .. } => Some(request_id),
            KycOutcome::AlreadyAtLevel { .. } => None,
        }
    }
}

/// Current KYC standing of the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycStatus {
    pub current_level: KycLevel,
    pub last_request: Option<KycRequest>,
    pub can_upgrade: bool,
    pub next_level: Option<KycLevel>,
}

impl KycStatus {
    pub fn new(current_level: KycLevel, last_request: Option<KycRequest>) -> Self {
        Self {
            current_level,
            last_request,
            can_upgrade: current_level.can_upgrade(),
            next_level: current_level.next(),
        }
    }
}
