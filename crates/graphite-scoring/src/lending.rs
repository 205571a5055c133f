//! Lending assessment - Trust-priced credit terms
//!
//! Loan cap:
//!
//! ```text
//! max_loan = max(1, reputation / 100) × (kyc + 1) × $1,000
//! ```
//!
//! Interest rate, in percent:
//!
//! ```text
//! rate = 5.0 + risk_premium - 0.5 × kyc
//! risk_premium = 5 if reputation < 300, 2 if reputation < 500, else 0
//! ```
//!
//! Unactivated or unverified accounts are turned away before any terms are
//! computed. A request above the cap is not refused outright: the offer comes
//! back ineligible with the cap as the approved amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use graphite_common::{KycLevel, TrustProfile};

use crate::policy::{
    BASE_INTEREST_RATE, HIGH_RISK_PREMIUM, KYC_RATE_DISCOUNT, LOAN_UNIT, LOW_REPUTATION_CEILING,
    LOW_RISK_KYC, LOW_RISK_REPUTATION, MEDIUM_RISK_KYC, MEDIUM_RISK_PREMIUM,
    MEDIUM_RISK_REPUTATION, MID_REPUTATION_CEILING, MIN_LENDING_KYC, MIN_TRUST_MULTIPLIER,
    REPUTATION_PER_MULTIPLIER,
};

/// Borrower risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Annual interest rate held as a percentage value (4.5 means 4.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Rate in percent
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Rate as a fraction (0.045 for 4.5%)
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Why an account cannot borrow at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IneligibleReason {
    ActivationRequired,
    KycRequired,
}

impl IneligibleReason {
    pub fn message(self) -> &'static str {
        match self {
            IneligibleReason::ActivationRequired => "Account must be activated",
            IneligibleReason::KycRequired => "KYC verification required",
        }
    }

    /// What the borrower should do next
    pub fn recommendation(self) -> &'static str {
        match self {
            IneligibleReason::ActivationRequired => "Complete account activation first",
            IneligibleReason::KycRequired => "Complete email verification (KYC Level 1)",
        }
    }
}

impl std::fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Computed loan terms for a borrower who passed the gates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingOffer {
    /// Whether the requested amount fits under the cap
    pub eligible: bool,
    pub requested_amount: Decimal,
    /// Requested amount if eligible, otherwise the cap (counter-offer)
    pub approved_amount: Decimal,
    pub max_loan_amount: Decimal,
    pub interest_rate: InterestRate,
    /// Reputation the terms were computed from
    pub trust_score: u64,
    pub kyc_level: KycLevel,
    pub risk_level: RiskLevel,
}

/// Outcome of a lending assessment
///
/// Ineligibility is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LendingAssessment {
    Ineligible { reason: IneligibleReason },
    Offer(LendingOffer),
}

impl LendingAssessment {
    /// True only for an offer covering the full requested amount
    pub fn is_eligible(&self) -> bool {
        matches!(self, LendingAssessment::Offer(offer) if offer.eligible)
    }

    pub fn offer(&self) -> Option<&LendingOffer> {
        match self {
            LendingAssessment::Offer(offer) => Some(offer),
            LendingAssessment::Ineligible { .. } => None,
        }
    }

    pub fn ineligible_reason(&self) -> Option<IneligibleReason> {
        match self {
            LendingAssessment::Ineligible { reason } => Some(*reason),
            LendingAssessment::Offer(_) => None,
        }
    }
}

/// Assess a borrower for a requested loan amount
pub fn assess_lending(profile: &TrustProfile, requested_amount: Decimal) -> LendingAssessment {
    if !profile.activated {
        return LendingAssessment::Ineligible {
            reason: IneligibleReason::ActivationRequired,
        };
    }

    if profile.kyc() < MIN_LENDING_KYC {
        return LendingAssessment::Ineligible {
            reason: IneligibleReason::KycRequired,
        };
    }

    let max_loan_amount = max_loan(profile.reputation, profile.kyc());
    let eligible = requested_amount <= max_loan_amount;

    LendingAssessment::Offer(LendingOffer {
        eligible,
        requested_amount,
        approved_amount: if eligible {
            requested_amount
        } else {
            max_loan_amount
        },
        max_loan_amount,
        interest_rate: interest_rate(profile.reputation, profile.kyc()),
        trust_score: profile.reputation,
        kyc_level: profile.kyc_level,
        risk_level: assess_risk(profile.reputation, profile.kyc()),
    })
}

/// Loan cap for a reputation / KYC pair
pub fn max_loan(reputation: u64, kyc_level: u8) -> Decimal {
    let trust_multiplier =
        (Decimal::from(reputation) / REPUTATION_PER_MULTIPLIER).max(MIN_TRUST_MULTIPLIER);
    let kyc_multiplier = Decimal::from(kyc_level) + Decimal::ONE;
    trust_multiplier * kyc_multiplier * LOAN_UNIT
}

/// Risk premium in percent
pub fn risk_premium(reputation: u64) -> Decimal {
    if reputation < LOW_REPUTATION_CEILING {
        HIGH_RISK_PREMIUM
    } else if reputation < MID_REPUTATION_CEILING {
        MEDIUM_RISK_PREMIUM
    } else {
        Decimal::ZERO
    }
}

/// Interest rate: base + risk premium - KYC discount
pub fn interest_rate(reputation: u64, kyc_level: u8) -> InterestRate {
    let kyc_discount = Decimal::from(kyc_level) * KYC_RATE_DISCOUNT;
    InterestRate::from_percent(BASE_INTEREST_RATE + risk_premium(reputation) - kyc_discount)
}

/// Classify borrower risk
pub fn assess_risk(reputation: u64, kyc_level: u8) -> RiskLevel {
    if reputation >= LOW_RISK_REPUTATION && kyc_level >= LOW_RISK_KYC {
        RiskLevel::Low
    } else if reputation >= MEDIUM_RISK_REPUTATION && kyc_level >= MEDIUM_RISK_KYC {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
