//! Turn state machine.
//!
//! ```text
//!            sow                  captures + turn update
//! PlayerTurn ───► CaptureResolution ────────────────────► EndgameCheck
//!     ▲                                                       │
//!     └─────────────── mover still has stones ────────────────┤
//!                                                             ▼
//!                                                          GameOver
//! ```
//!
//! A session starts in `GameOver` until the stones are dealt.

use serde::{Deserialize, Serialize};

use crate::core::{PitId, Player};

/// Where a session is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for `player` to choose a pit.
    PlayerTurn(Player),

    /// `mover` has sown and the last stone landed in `last_pit`.
    /// No pit may be sown until captures are resolved.
    CaptureResolution { mover: Player, last_pit: PitId },

    /// Captures are resolved and the turn has passed to `to_move`, who
    /// may have nothing left to sow.
    EndgameCheck(Player),

    /// No further moves. The player is the one reported as current:
    /// player one before the deal, the sweeping player after an ending.
    GameOver(Player),
}

impl TurnPhase {
    /// Player the session reports as current.
    #[must_use]
    pub const fn current_player(self) -> Player {
        match self {
            TurnPhase::PlayerTurn(p) | TurnPhase::EndgameCheck(p) | TurnPhase::GameOver(p) => p,
            TurnPhase::CaptureResolution { mover, .. } => mover,
        }
    }

    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }

    /// False only between a sow and its capture resolution.
    #[must_use]
    pub const fn captures_done(self) -> bool {
        !matches!(self, TurnPhase::CaptureResolution { .. })
    }

    /// Landing pit of a sow whose captures are still pending.
    #[must_use]
    pub const fn last_pit(self) -> Option<PitId> {
        match self {
            TurnPhase::CaptureResolution { last_pit, .. } => Some(last_pit),
            _ => None,
        }
    }
}

/// Who moves after `mover`'s sow.
///
/// Ending in one's own target earns another move; anything else passes
/// the turn.
#[must_use]
pub const fn next_to_move(mover: Player, landed_in_own_target: bool) -> Player {
    if landed_in_own_target {
        mover
    } else {
        mover.other()
    }
}
