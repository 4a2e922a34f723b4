//! Session types and messages.

mod messages;
mod session;
mod types;

pub use messages::{Choice, Reveal};
pub use session::GameSession;
pub use types::{Outcome, SessionId};
