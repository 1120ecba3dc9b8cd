//! Move policies: who picks the next pit.
//!
//! A policy only sees the session and returns a pit. It is never asked to
//! move once the game is over.

mod greedy;
mod random;

pub use greedy::Greedy;
pub use random::UniformRandom;

use crate::core::PitId;
use crate::game::Session;

/// Chooses moves for whichever player is to move.
pub trait MovePolicy {
    /// Pick a pit to sow, or `None` if there is no legal move.
    fn choose_move(&mut self, session: &Session) -> Option<PitId>;

    /// Short name for logs and CLI output.
    fn name(&self) -> &str;
}
