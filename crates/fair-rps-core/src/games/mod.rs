//! Move sets, relation rules and outcome resolution.

mod moves;
mod relations;
mod resolver;

pub use moves::{Move, MoveSet, ValidationError, MIN_MOVES};
pub use relations::{PayoffTable, RelationEntry, RelationTable};
pub use resolver::{resolve, ResolutionError};
