//! KYC - Verification tiers issued by the Graphite KYC contract
//!
//! Levels only ever increase:
//! - 0: unverified
//! - 1: email verified
//! - 2: government ID verified
//! - 3: video call verified

use serde::{Deserialize, Serialize};

/// KYC verification tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycLevel {
    Unverified = 0,
    EmailVerified = 1,
    IdVerified = 2,
    VideoVerified = 3,
}

impl KycLevel {
    /// All levels in ascending order
    pub const ALL: [KycLevel; 4] = [
        KycLevel::Unverified,
        KycLevel::EmailVerified,
        KycLevel::IdVerified,
        KycLevel::VideoVerified,
    ];

    /// Map a raw provider value onto a level.
    ///
    /// Anything above 3 clamps to [`KycLevel::VideoVerified`].
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KycLevel::Unverified,
            1 => KycLevel::EmailVerified,
            2 => KycLevel::IdVerified,
            _ => KycLevel::VideoVerified,
        }
    }

    /// Strict conversion, `None` for values outside 0..=3
    pub fn try_from_raw(raw: u8) -> Option<Self> {
        (raw <= crate::MAX_KYC_LEVEL).then(|| Self::from_raw(raw))
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            KycLevel::Unverified => "Unverified",
            KycLevel::EmailVerified => "Email Verified",
            KycLevel::IdVerified => "ID Verified",
            KycLevel::VideoVerified => "Video Verified",
        }
    }

    /// Next level up, `None` at the top
    pub fn next(self) -> Option<Self> {
        match self {
            KycLevel::VideoVerified => None,
            other => Some(Self::from_raw(other.as_u8() + 1)),
        }
    }

    pub fn can_upgrade(self) -> bool {
        self.next().is_some()
    }
}

impl Default for KycLevel {
    fn default() -> Self {
        KycLevel::Unverified
    }
}

impl std::fmt::Display for KycLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {} ({})", self.as_u8(), self.description())
    }
}

/// Status of a submitted KYC request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Most recent KYC request recorded for an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycRequest {
    /// Client-generated request id
    pub request_id: String,
    /// Level that was requested
    pub level: KycLevel,
    pub status: KycRequestStatus,
    /// Submission timestamp (Unix milliseconds)
    pub submitted_at: i64,
}
