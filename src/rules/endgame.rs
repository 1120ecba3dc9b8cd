//! End of game.
//!
//! The game ends when the player about to move has no stones in any of
//! their sowable pits. The other player then sweeps everything left on
//! their own side into their own target, which leaves every stone in a
//! target and the final score summing to the stones in play.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Pit};
use crate::core::{GameRng, IntegrityError, PitId, Player};

/// The closing sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweep {
    /// Player whose remaining stones were swept into their own target.
    pub player: Player,
    pub stones: usize,
}

/// True if `player` has nothing to sow.
#[must_use]
pub fn is_exhausted(board: &Board, player: Player) -> bool {
    board.side_count(player) == 0
}

/// Move every stone on `player`'s sowable pits into `player`'s target.
pub fn sweep(board: &mut Board, player: Player, rng: &mut GameRng) -> Result<usize, IntegrityError> {
    let pits: Vec<PitId> = board
        .sowable_pits(player)
        .filter(|p| !p.is_empty())
        .map(Pit::id)
        .collect();

    for &pit in &pits {
        board.pickup(pit)?;
    }
    let swept = board.unplaced();
    board.add_all(board.target(player), &swept, rng)?;

    debug!(%player, pits = pits.len(), stones = swept.len(), "swept");
    Ok(swept.len())
}

/// End the game if `to_move` is exhausted.
///
/// Returns the sweep that closed the game, or `None` if play continues.
pub fn check(board: &mut Board, to_move: Player, rng: &mut GameRng) -> Result<Option<Sweep>, IntegrityError> {
    if !is_exhausted(board, to_move) {
        return Ok(None);
    }

    let sweeper = to_move.other();
    let stones = sweep(board, sweeper, rng)?;
    let score = board.score();
    info!(stuck = %to_move, sweeper = %sweeper, %score, "game over");

    Ok(Some(Sweep {
        player: sweeper,
        stones,
    }))
}
