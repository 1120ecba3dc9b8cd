//! Captures.
//!
//! When the last stone of a sow lands alone in one of the mover's own
//! sowable pits, and the facing pit holds stones, both pits are emptied
//! into the mover's target.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{GameRng, IntegrityError, PitId, Player};

/// A capture that happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Pit the last stone landed in.
    pub pit: PitId,
    /// The facing pit that was emptied.
    pub opposite: PitId,
    /// Stones moved into the target, counting the capturing stone.
    pub stones: usize,
}

/// The facing pit `player` would capture from, if a sow ending in
/// `last_pit` triggers a capture.
#[must_use]
pub fn capture_target(board: &Board, player: Player, last_pit: PitId) -> Option<PitId> {
    let pit = board.pit(last_pit)?;
    if pit.owner() != player || pit.is_target() || pit.count() != 1 {
        return None;
    }
    let opposite = board.opposite(last_pit)?;
    (board.count(opposite) > 0).then_some(opposite)
}

/// Resolve captures for a sow by `player` that ended in `last_pit`.
pub fn resolve(
    board: &mut Board,
    player: Player,
    last_pit: PitId,
    rng: &mut GameRng,
) -> Result<Option<Capture>, IntegrityError> {
    let Some(opposite) = capture_target(board, player, last_pit) else {
        return Ok(None);
    };

    board.pickup(opposite)?;
    board.pickup(last_pit)?;
    let captured = board.unplaced();
    board.add_all(board.target(player), &captured, rng)?;

    debug!(%player, pit = %last_pit, %opposite, stones = captured.len(), "captured");

    Ok(Some(Capture {
        pit: last_pit,
        opposite,
        stones: captured.len(),
    }))
}
