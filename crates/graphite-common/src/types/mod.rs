//! Core data types for the Graphite wrapper

pub mod address;
pub mod kyc;
pub mod transaction;
pub mod trust_profile;
