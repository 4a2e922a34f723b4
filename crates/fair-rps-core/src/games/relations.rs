//! Win/lose/draw relations by circular distance.
//!
//! For a set of `n` moves with `half = n / 2`, the move at index `i` beats
//! the `half` moves before it and loses to the `half` moves after it:
//!
//! ```text
//! beats(i)     = { (i + n - j) mod n : j in 1..=half }
//! beaten_by(i) = { (i + j) mod n     : j in 1..=half }
//! ```
//!
//! Since `n` is odd, `2 * half = n - 1`, so the two sets are disjoint and
//! together with `i` itself cover the whole set.

use super::MoveSet;
use crate::protocol::Outcome;

/// Relations of a single move, by index into its [`MoveSet`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationEntry {
    index: usize,
    beats: Vec<usize>,
    beaten_by: Vec<usize>,
}

impl RelationEntry {
    /// Index of the move this entry describes
    pub fn index(&self) -> usize {
        self.index
    }

    /// Indices this move defeats, nearest first
    pub fn beats(&self) -> &[usize] {
        &self.beats
    }

    /// Indices that defeat this move, nearest first
    pub fn beaten_by(&self) -> &[usize] {
        &self.beaten_by
    }

    /// Outcome for a move at `other` played against this move
    pub fn outcome_for(&self, other: usize) -> Outcome {
        if self.beaten_by.contains(&other) {
            Outcome::Win
        } else if self.beats.contains(&other) {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }
}

/// Relation entries for every move in a set, in set order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationTable {
    entries: Vec<RelationEntry>,
}

impl RelationTable {
    /// Build relations for a validated move set
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let half = moves.half();

        let entries = (0..n)
            .map(|i| RelationEntry {
                index: i,
                beats: (1..=half).map(|j| (i + n - j) % n).collect(),
                beaten_by: (1..=half).map(|j| (i + j) % n).collect(),
            })
            .collect();

        Self { entries }
    }

    /// Number of moves covered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a table built from a validated set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for the move at `index`
    pub fn entry(&self, index: usize) -> Option<&RelationEntry> {
        self.entries.get(index)
    }

    /// All entries in set order
    pub fn entries(&self) -> &[RelationEntry] {
        &self.entries
    }

    /// Outcome for the move at `col` against the move at `row`
    ///
    /// Panics if either index is out of range.
    pub fn relation(&self, row: usize, col: usize) -> Outcome {
        self.entries[row].outcome_for(col)
    }

    /// Full payoff matrix, rows = opponent move, columns = player move
    pub fn payoff_table(&self) -> PayoffTable {
        let rows = self
            .entries
            .iter()
            .map(|entry| (0..self.entries.len()).map(|col| entry.outcome_for(col)).collect())
            .collect();
        PayoffTable { rows }
    }
}

/// Square matrix of outcomes from the player's point of view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoffTable {
    rows: Vec<Vec<Outcome>>,
}

impl PayoffTable {
    /// Rows in move set order
    pub fn rows(&self) -> &[Vec<Outcome>] {
        &self.rows
    }

    /// Outcome for player move `col` against opponent move `row`
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
