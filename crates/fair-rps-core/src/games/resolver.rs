//! Outcome resolution for the player's choice against the committed move.

use super::{MoveSet, RelationTable};
use crate::protocol::Outcome;
use thiserror::Error;

/// Errors from resolving the player's choice
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Choice {choice} is out of range 1..={max}")]
    IndexOutOfRange { choice: usize, max: usize },

    #[error("Choice {input:?} is not a number")]
    NotANumber { input: String },
}

/// Resolve a 1-based player choice against the committed move index
///
/// The player wins when their move beats the committed move, loses when the
/// committed move beats theirs, and draws on the same move.
///
/// # Panics
///
/// Panics if `committed_index` is not a valid index into `moves`. The
/// committed index always comes from a [`crate::Commitment`] drawn over the
/// same set, so only `human_choice` is checked.
pub fn resolve(
    table: &RelationTable,
    moves: &MoveSet,
    committed_index: usize,
    human_choice: usize,
) -> Result<Outcome, ResolutionError> {
    let max = moves.len();
    if human_choice == 0 || human_choice > max {
        return Err(ResolutionError::IndexOutOfRange {
            choice: human_choice,
            max,
        });
    }

    let human = human_choice - 1;
    Ok(table.relation(committed_index, human))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> (MoveSet, RelationTable) {
        let moves = MoveSet::validate(["Rock", "Paper", "Scissors"]).unwrap();
        let table = RelationTable::build(&moves);
        (moves, table)
    }

    #[test]
    fn test_player_wins() {
        let (moves, table) = rps();
        // Opponent Rock, player Paper
        assert_eq!(resolve(&table, &moves, 0, 2), Ok(Outcome::Win));
        // Opponent Scissors, player Rock
        assert_eq!(resolve(&table, &moves, 2, 1), Ok(Outcome::Win));
    }

    #[test]
    fn test_player_loses() {
        let (moves, table) = rps();
        // Opponent Rock, player Scissors
        assert_eq!(resolve(&table, &moves, 0, 3), Ok(Outcome::Lose));
        // Opponent Paper, player Rock
        assert_eq!(resolve(&table, &moves, 1, 1), Ok(Outcome::Lose));
    }

    #[test]
    fn test_same_move_draws() {
        let (moves, table) = rps();
        for i in 0..3 {
            assert_eq!(resolve(&table, &moves, i, i + 1), Ok(Outcome::Draw));
        }
    }

    #[test]
    fn test_out_of_range_choices() {
        let (moves, table) = rps();
        assert_eq!(
            resolve(&table, &moves, 0, 0),
            Err(ResolutionError::IndexOutOfRange { choice: 0, max: 3 })
        );
        assert_eq!(
            resolve(&table, &moves, 0, 4),
            Err(ResolutionError::IndexOutOfRange { choice: 4, max: 3 })
        );
    }

    #[test]
    #[should_panic]
    fn test_committed_index_out_of_range_panics() {
        let (moves, table) = rps();
        let _ = resolve(&table, &moves, 3, 1);
    }

    #[test]
    fn test_all_outcomes_balanced() {
        let (moves, table) = rps();
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for committed in 0..3 {
            for choice in 1..=3 {
                match resolve(&table, &moves, committed, choice).unwrap() {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let moves = MoveSet::validate(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let table = RelationTable::build(&moves);
        for committed in 0..7 {
            for choice in 1..=7 {
                assert_eq!(
                    resolve(&table, &moves, committed, choice),
                    resolve(&table, &moves, committed, choice)
                );
            }
        }
    }
}
