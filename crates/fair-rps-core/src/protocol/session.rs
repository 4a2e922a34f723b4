//! A single commit-choose-reveal game.

use crate::crypto::{Commitment, CryptoError, HmacDigest, RandomSource};
use crate::games::{resolve, MoveSet, PayoffTable, RelationTable, ResolutionError};
use crate::protocol::{Reveal, SessionId};
use tracing::{debug, info};

/// One game against the computer
///
/// The opponent's move is committed in [`GameSession::start`], before any
/// player input exists. [`GameSession::resolve`] consumes the session, so a
/// commitment is opened at most once.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    relations: RelationTable,
    commitment: Commitment,
}

impl GameSession {
    /// Build the relation table and commit to the opponent's move
    pub fn start(moves: MoveSet, rng: &mut impl RandomSource) -> Result<Self, CryptoError> {
        let id = SessionId::new();
        let relations = RelationTable::build(&moves);
        let commitment = Commitment::generate(&moves, rng)?;

        debug!(
            session = %id,
            moves = moves.len(),
            digest = %commitment.digest(),
            "Session started"
        );

        Ok(Self {
            id,
            moves,
            relations,
            commitment,
        })
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Digest to show before the player chooses
    pub fn digest(&self) -> HmacDigest {
        self.commitment.digest()
    }

    /// Moves in menu order
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Relation table for the move set
    pub fn relations(&self) -> &RelationTable {
        &self.relations
    }

    /// Payoff matrix for the help screen
    ///
    /// Does not touch the commitment.
    pub fn payoff_table(&self) -> PayoffTable {
        self.relations.payoff_table()
    }

    /// Resolve the player's 1-based choice and open the commitment
    ///
    /// On error the commitment is dropped unopened.
    pub fn resolve(self, human_choice: usize) -> Result<Reveal, ResolutionError> {
        let committed = self.commitment.sealed_index();
        let outcome = match resolve(&self.relations, &self.moves, committed, human_choice) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(session = %self.id, error = %e, "Session ended without a result");
                return Err(e);
            }
        };

        let digest = self.commitment.digest();
        let (key, opponent_index, opponent_move) = self.commitment.open();
        let human_index = human_choice - 1;

        info!(
            session = %self.id,
            outcome = %outcome,
            opponent = %opponent_move,
            "Session resolved"
        );

        Ok(Reveal {
            outcome,
            key,
            opponent_move,
            opponent_index,
            human_move: self.moves[human_index].clone(),
            human_index,
            digest,
        })
    }
}
