//! Game rules.
//!
//! One move runs through these in order:
//!
//! 1. `sowing`: lift the chosen pit and sow its stones around the ring
//! 2. `capture`: a lone last stone on the mover's side takes the facing pit
//! 3. `turn`: landing in one's own target earns another move
//! 4. `endgame`: a player with nothing to sow ends the game
//!
//! Each step is a free function over `Board`. `Session` composes them.

pub mod turn;
pub mod sowing;
pub mod capture;
pub mod endgame;

pub use turn::{next_to_move, TurnPhase};
pub use sowing::Sow;
pub use capture::Capture;
pub use endgame::Sweep;
