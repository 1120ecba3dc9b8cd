//! Sowing: lift a pit and drop its stones one per pit around the ring.
//!
//! Stones are dropped in ascending stone id, not in the order they sat in
//! the pit. Recorded games depend on this.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{GameRng, InvalidMove, PitId, PlayError, Player};

/// What a completed sow did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sow {
    pub origin: PitId,
    pub last_pit: PitId,
    pub stones: usize,
}

/// Check that `player` may sow `pit`.
///
/// The pit must exist, belong to the player, hold stones, and not be a
/// target. Checked in that order.
pub fn validate(board: &Board, player: Player, pit: PitId) -> Result<(), InvalidMove> {
    let p = board.pit(pit).ok_or(InvalidMove::NoSuchPit {
        pit,
        ring_len: board.ring_len(),
    })?;

    if p.owner() != player {
        return Err(InvalidMove::NotYourPit {
            pit,
            owner: p.owner(),
            current: player,
        });
    }
    if p.is_empty() {
        return Err(InvalidMove::EmptyPit(pit));
    }
    if p.is_target() {
        return Err(InvalidMove::TargetPit(pit));
    }
    Ok(())
}

/// Sow `pit` for `player`.
///
/// Starting with the pit after `pit`, each unplaced stone goes into the
/// next pit on the ring. The opponent's target is skipped; the sower's own
/// target is not. A long sow can lap the ring and drop into `pit` again.
pub fn sow(board: &mut Board, player: Player, pit: PitId, rng: &mut GameRng) -> Result<Sow, PlayError> {
    validate(board, player, pit)?;

    board.pickup(pit)?;
    let stones = board.unplaced();

    let ring_len = board.ring_len();
    let skip = board.target(player.other());
    let mut next = pit.next(ring_len);
    let mut last_pit = pit;

    for &stone in &stones {
        if next == skip {
            next = next.next(ring_len);
        }
        board.add(next, stone, rng)?;
        last_pit = next;
        next = next.next(ring_len);
    }

    debug!(%player, origin = %pit, %last_pit, stones = stones.len(), "sowed");

    Ok(Sow {
        origin: pit,
        last_pit,
        stones: stones.len(),
    })
}
