//! Player input and the final reveal.

use crate::crypto::{compute_hmac, HmacDigest, SecretKey};
use crate::games::{Move, ResolutionError};
use crate::protocol::Outcome;
use serde::{Deserialize, Serialize};

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// `0`: leave without resolving
    Exit,
    /// `?`: show the payoff table and keep waiting
    Help,
    /// 1-based move number, range checked on resolve
    Pick(usize),
}

impl Choice {
    /// Parse a line of input, ignoring surrounding whitespace
    pub fn parse(line: &str) -> Result<Self, ResolutionError> {
        match line.trim() {
            "0" => Ok(Choice::Exit),
            "?" => Ok(Choice::Help),
            other => other
                .parse::<usize>()
                .map(Choice::Pick)
                .map_err(|_| ResolutionError::NotANumber {
                    input: other.to_string(),
                }),
        }
    }
}

/// Everything disclosed once the game is resolved
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    pub outcome: Outcome,
    pub key: SecretKey,
    pub opponent_move: Move,
    pub opponent_index: usize,
    pub human_move: Move,
    pub human_index: usize,
    pub digest: HmacDigest,
}

impl Reveal {
    /// Recompute the HMAC from the revealed key and move
    pub fn verify(&self) -> bool {
        compute_hmac(&self.key, self.opponent_move.as_str())
            .map(|digest| digest == self.digest)
            .unwrap_or(false)
    }
}
