//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey for the per-session HMAC key
//! - HmacDigest and Commitment for the commit-reveal scheme
//! - RandomSource for injectable randomness

mod commitment;
mod key;
mod random;

pub use commitment::{compute_hmac, verify_reveal, Commitment, HmacDigest};
pub use key::SecretKey;
pub use random::{RandomSource, RngSource};

use thiserror::Error;

/// Errors from commitment operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid HMAC key: {0}")]
    InvalidKey(String),

    #[error("Invalid HMAC digest: {0}")]
    InvalidDigest(String),
}
