//! Trust lending desk
//!
//! Loans are drawn from a single pool. Terms come straight from the lending
//! assessment; the desk only adds pool accounting on top.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument, warn};

use graphite_client::{GraphiteClient, TrustDataProvider};
use graphite_common::{Address, Result};
use graphite_scoring::{InterestRate, LendingAssessment, RiskLevel};

/// What the desk decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum LoanDecision {
    Approved {
        amount: Decimal,
        interest_rate: InterestRate,
        risk_level: RiskLevel,
        trust_score: u64,
    },
    /// Request exceeded the borrower's cap; the cap is offered instead
    CounterOffer {
        requested: Decimal,
        offered: Decimal,
        interest_rate: InterestRate,
    },
    Denied {
        reason: String,
        recommendation: String,
    },
    /// Borrower qualified but the pool can't cover it
    PoolExhausted {
        approved: Decimal,
        available: Decimal,
    },
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved { .. })
    }
}

/// A processed loan application
#[derive(Debug, Clone, Serialize)]
pub struct LoanApplication {
    pub borrower: Address,
    pub amount: Decimal,
    pub purpose: String,
    pub assessment: LendingAssessment,
    pub decision: LoanDecision,
}

/// Lending application over a Graphite client
pub struct TrustLendingApp<P> {
    client: GraphiteClient<P>,
    loan_pool: Mutex<Decimal>,
}

impl<P: TrustDataProvider> TrustLendingApp<P> {
    /// Create a desk with the default pool
    pub fn new(client: GraphiteClient<P>) -> Self {
        Self::with_pool(client, Decimal::from(crate::DEFAULT_LOAN_POOL))
    }

    pub fn with_pool(client: GraphiteClient<P>, pool: Decimal) -> Self {
        info!(%pool, "TrustLend desk initialized");
        Self {
            client,
            loan_pool: Mutex::new(pool),
        }
    }

    pub fn client(&self) -> &GraphiteClient<P> {
        &self.client
    }

    /// Remaining funds in the pool
    pub fn available(&self) -> Decimal {
        *self.loan_pool.lock()
    }

    /// Assess a borrower and, on approval, fund the loan from the pool
    #[instrument(skip(self), fields(borrower = %borrower.short()))]
    pub async fn process_loan_application(
        &self,
        borrower: &Address,
        amount: Decimal,
        purpose: &str,
    ) -> Result<LoanApplication> {
        info!(%amount, purpose, "Loan application received");

        let assessment = self.client.assess_lending(Some(borrower), amount).await?;

        let decision = match &assessment {
            LendingAssessment::Ineligible { reason } => LoanDecision::Denied {
                reason: reason.message().to_string(),
                recommendation: reason.recommendation().to_string(),
            },
            LendingAssessment::Offer(offer) if !offer.eligible => LoanDecision::CounterOffer {
                requested: offer.requested_amount,
                offered: offer.approved_amount,
                interest_rate: offer.interest_rate,
            },
            LendingAssessment::Offer(offer) => {
                let mut pool = self.loan_pool.lock();
                if offer.approved_amount > *pool {
                    LoanDecision::PoolExhausted {
                        approved: offer.approved_amount,
                        available: *pool,
                    }
                } else {
                    *pool -= offer.approved_amount;
                    LoanDecision::Approved {
                        amount: offer.approved_amount,
                        interest_rate: offer.interest_rate,
                        risk_level: offer.risk_level,
                        trust_score: offer.trust_score,
                    }
                }
            }
        };

        match &decision {
            LoanDecision::Approved {
                amount,
                interest_rate,
                risk_level,
                trust_score,
            } => info!(
                %amount,
                rate = %interest_rate,
                risk = %risk_level,
                trust_score,
                "Loan approved"
            ),
            LoanDecision::CounterOffer { offered, .. } => {
                info!(%offered, "Request above cap, counter-offer made")
            }
            LoanDecision::Denied {
                reason,
                recommendation,
            } => info!(reason = %reason, recommendation = %recommendation, "Loan denied"),
            LoanDecision::PoolExhausted { available, .. } => {
                warn!(%available, "Loan pool cannot cover approved amount")
            }
        }

        Ok(LoanApplication {
            borrower: borrower.clone(),
            amount,
            purpose: purpose.to_string(),
            assessment,
            decision,
        })
    }
}
