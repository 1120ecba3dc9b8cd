//! Stones: identity-bearing tokens that move between pits.

use serde::{Deserialize, Serialize};

use crate::core::{PitId, Player, SlotId, StoneId};

/// Cosmetic tint of a stone. Has no effect on play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    /// Colour of a stone that has never been dealt.
    #[default]
    Neutral,
    /// Coloured by the owner of the pit it was first dealt into.
    Player(Player),
}

impl Tint {
    /// Hex colour used by renderers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Tint::Neutral | Tint::Player(Player::One) => "#6666af",
            Tint::Player(Player::Two) => "#75755e",
        }
    }
}

/// Where a placed stone sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub pit: PitId,
    pub slot: SlotId,
}

/// A stone and its current placement.
///
/// Pit and slot are set and cleared together, so a stone is either fully
/// placed or fully unplaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    id: StoneId,
    placement: Option<Placement>,
    tint: Tint,
}

impl Stone {
    /// Create an unplaced, neutral stone.
    #[must_use]
    pub const fn new(id: StoneId) -> Self {
        Self {
            id,
            placement: None,
            tint: Tint::Neutral,
        }
    }

    #[must_use]
    pub const fn id(&self) -> StoneId {
        self.id
    }

    /// Pit this stone is in, if placed.
    #[must_use]
    pub fn pit(&self) -> Option<PitId> {
        self.placement.map(|p| p.pit)
    }

    /// Slot within its pit, if placed.
    #[must_use]
    pub fn position(&self) -> Option<SlotId> {
        self.placement.map(|p| p.slot)
    }

    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    #[must_use]
    pub const fn tint(&self) -> Tint {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    pub(crate) fn place(&mut self, pit: PitId, slot: SlotId) {
        self.placement = Some(Placement { pit, slot });
    }

    pub(crate) fn lift(&mut self) {
        self.placement = None;
    }
}

/// Create `count` unplaced stones with ids `0..count`.
#[must_use]
pub fn make_stones(count: usize) -> Vec<Stone> {
    (0..count as u32).map(|i| Stone::new(StoneId(i))).collect()
}
