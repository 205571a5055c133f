//! Business constants for the trust policy
//!
//! These are tuning knobs, not derived quantities. Thresholds are inclusive
//! lower bounds unless the name says otherwise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Trust tiers (also used for seller badges and listing caps)

/// Reputation needed for the top tier
pub const EXCELLENT_REPUTATION: u64 = 750;
/// KYC level needed for the top tier
pub const EXCELLENT_KYC: u8 = 2;
/// Reputation needed for the second tier
pub const GOOD_REPUTATION: u64 = 500;
/// KYC level needed for the second tier
pub const GOOD_KYC: u8 = 1;
/// Reputation needed for the third tier (any KYC level)
pub const BUILDING_REPUTATION: u64 = 250;

// Features

/// KYC level that unlocks lending and borrowing
pub const LENDING_FEATURE_KYC: u8 = 1;
/// KYC level that unlocks advanced trading
pub const ADVANCED_TRADING_KYC: u8 = 2;
/// Reputation that unlocks premium rates
pub const PREMIUM_RATES_REPUTATION: u64 = 500;

// Lending

/// Minimum KYC level to borrow at all
pub const MIN_LENDING_KYC: u8 = 1;
/// Reputation points per unit of trust multiplier
pub const REPUTATION_PER_MULTIPLIER: Decimal = dec!(100);
/// Floor for the trust multiplier
pub const MIN_TRUST_MULTIPLIER: Decimal = Decimal::ONE;
/// Dollar amount per unit of combined multiplier
pub const LOAN_UNIT: Decimal = dec!(1000);

/// Base annual interest rate, percent
pub const BASE_INTEREST_RATE: Decimal = dec!(5.0);
/// Premium below [`LOW_REPUTATION_CEILING`], percent
pub const HIGH_RISK_PREMIUM: Decimal = dec!(5);
/// Premium below [`MID_REPUTATION_CEILING`], percent
pub const MEDIUM_RISK_PREMIUM: Decimal = dec!(2);
/// Reputation strictly below this pays [`HIGH_RISK_PREMIUM`]
pub const LOW_REPUTATION_CEILING: u64 = 300;
/// Reputation strictly below this pays [`MEDIUM_RISK_PREMIUM`]
pub const MID_REPUTATION_CEILING: u64 = 500;
/// Rate discount per KYC level, percent
pub const KYC_RATE_DISCOUNT: Decimal = dec!(0.5);

/// Reputation for low risk
pub const LOW_RISK_REPUTATION: u64 = 600;
/// KYC level for low risk
pub const LOW_RISK_KYC: u8 = 2;
/// Reputation for medium risk
pub const MEDIUM_RISK_REPUTATION: u64 = 400;
/// KYC level for medium risk
pub const MEDIUM_RISK_KYC: u8 = 1;

// Marketplace

/// Reputation needed to sell high-value items
pub const HIGH_VALUE_REPUTATION: u64 = 500;
/// KYC level needed to sell high-value items
pub const HIGH_VALUE_KYC: u8 = 2;
/// Listing cap for verified sellers, dollars
pub const VERIFIED_LISTING_CAP: u64 = 50_000;
/// Listing cap for new sellers, dollars
pub const NEW_SELLER_LISTING_CAP: u64 = 10_000;
/// Listing cap for everyone else, dollars
pub const MINIMAL_LISTING_CAP: u64 = 1_000;
