//! Moves and validated move sets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Errors from move set validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The number of moves must be at least 3 (got {count})")]
    TooFewMoves { count: usize },

    #[error("The number of moves must be odd (got {count})")]
    EvenCount { count: usize },

    #[error("All moves must be unique ({name:?} appears more than once)")]
    DuplicateMove { name: String },
}

/// A move name as given on the command line
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    /// Get the move name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Move {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for Move {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for Move {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Move {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Move {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?})", self.0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free, odd-sized set of moves
///
/// Order defines the cycle: each move beats the half of the set that
/// precedes it and loses to the half that follows it, wrapping around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet(Vec<Move>);

impl MoveSet {
    /// Validate raw move names
    ///
    /// Checks run in order: count, parity, uniqueness.
    pub fn validate<I, S>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<Move> = raw.into_iter().map(|s| Move(s.into())).collect();
        let count = moves.len();

        if count < MIN_MOVES {
            return Err(ValidationError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(ValidationError::EvenCount { count });
        }

        let mut seen = HashSet::with_capacity(count);
        for m in &moves {
            if !seen.insert(m.as_str()) {
                return Err(ValidationError::DuplicateMove {
                    name: m.0.clone(),
                });
            }
        }

        Ok(Self(moves))
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Iterate in cycle order
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Look up a move by 0-based index
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.0.get(index)
    }

}

impl Index<usize> for MoveSet {
    type Output = Move;

    fn index(&self, index: usize) -> &Move {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
