//! Fair RPS Core Library
//!
//! This crate provides the move relation engine, the HMAC commit-reveal scheme,
//! and outcome resolution for rock-paper-scissors generalized to any odd number
//! of moves.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{
    compute_hmac, verify_reveal, Commitment, CryptoError, HmacDigest, RandomSource, RngSource,
    SecretKey,
};
pub use games::{
    resolve, Move, MoveSet, PayoffTable, RelationEntry, RelationTable, ResolutionError,
    ValidationError,
};
pub use protocol::{Choice, GameSession, Outcome, Reveal, SessionId};
