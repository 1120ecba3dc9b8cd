//! Pits: grids of slots that hold stacks of stones.
//!
//! A pit is drawn as a grid laid over a round hole, so the four corner
//! slots fall outside the hole and are permanently disabled. Every other
//! slot holds any number of stones.
//!
//! ```text
//!  . .        sowable pit, grid = 4:
//! . 2 .       16 slots, 12 enabled
//! . . .
//!  1 .
//! ```
//!
//! The pit never owns stones. It records stone ids per slot, and the
//! `Stone` values themselves (with their placement back-references) are
//! passed in by the caller. `add` and `pickup` update both sides together.

use smallvec::SmallVec;

use super::stone::Stone;
use crate::core::{GameRng, IntegrityError, PitId, Player, SlotId, StoneId};

/// Stack of stones in one slot. Almost always 0-2 deep.
pub type SlotStack = SmallVec<[StoneId; 4]>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot {
    Disabled,
    Open(SlotStack),
}

/// A pit on the ring.
#[derive(Clone, Debug)]
pub struct Pit {
    id: PitId,
    owner: Player,
    is_target: bool,
    rows: usize,
    cols: usize,
    slots: Vec<Slot>,
}

impl Pit {
    /// Create a pit with a `rows` × `cols` slot grid and its corners disabled.
    ///
    /// Fails with `NoEnabledSlots` if the corners cover the whole grid
    /// (an empty grid, or anything within 2 × 2).
    pub fn new(id: PitId, owner: Player, is_target: bool, rows: usize, cols: usize) -> Result<Self, IntegrityError> {
        if rows == 0 || cols == 0 {
            return Err(IntegrityError::NoEnabledSlots { pit: id });
        }

        let len = rows * cols;
        let mut slots = vec![Slot::Open(SlotStack::new()); len];
        for corner in [0, cols - 1, len - cols, len - 1] {
            slots[corner] = Slot::Disabled;
        }
        if !slots.iter().any(|slot| matches!(slot, Slot::Open(_))) {
            return Err(IntegrityError::NoEnabledSlots { pit: id });
        }

        Ok(Self {
            id,
            owner,
            is_target,
            rows,
            cols,
            slots,
        })
    }

    /// A sowable pit with a square `grid` × `grid` layout.
    pub fn sowable(id: PitId, owner: Player, grid: usize) -> Result<Self, IntegrityError> {
        Self::new(id, owner, false, grid, grid)
    }

    /// A target pit, `grid` columns wide with room for `target_slots` slots.
    pub fn target(id: PitId, owner: Player, grid: usize, target_slots: usize) -> Result<Self, IntegrityError> {
        if grid == 0 {
            return Err(IntegrityError::NoEnabledSlots { pit: id });
        }
        Self::new(id, owner, true, target_slots.div_ceil(grid), grid)
    }

    #[must_use]
    pub const fn id(&self) -> PitId {
        self.id
    }

    #[must_use]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub const fn is_target(&self) -> bool {
        self.is_target
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total slots, enabled or not.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_enabled(&self, slot: SlotId) -> bool {
        matches!(self.slots.get(slot.index()), Some(Slot::Open(_)))
    }

    /// Stones stacked in `slot`. Empty for disabled or unknown slots.
    #[must_use]
    pub fn stones_in(&self, slot: SlotId) -> &[StoneId] {
        match self.slots.get(slot.index()) {
            Some(Slot::Open(stack)) => stack.as_slice(),
            _ => &[],
        }
    }

    /// Every stone in the pit, slot by slot.
    pub fn stones(&self) -> impl Iterator<Item = StoneId> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Open(stack) => Some(stack),
                Slot::Disabled => None,
            })
            .flatten()
            .copied()
    }

    /// Number of stones across all enabled slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Open(stack) => stack.len(),
                Slot::Disabled => 0,
            })
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Candidate slots for a new stone.
    ///
    /// With `reuse == false` only empty enabled slots are returned; with
    /// `reuse == true` every enabled slot is, so stones can stack.
    #[must_use]
    pub fn free_slots(&self, reuse: bool) -> Vec<SlotId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| match slot {
                Slot::Open(stack) => reuse || stack.is_empty(),
                Slot::Disabled => false,
            })
            .map(|(i, _)| SlotId(i as u16))
            .collect()
    }

    /// Put an unplaced stone into a random slot, preferring empty ones.
    ///
    /// Returns the slot chosen.
    pub fn add(&mut self, stone: &mut Stone, rng: &mut GameRng) -> Result<SlotId, IntegrityError> {
        if let Some(placed_in) = stone.pit() {
            return Err(IntegrityError::AlreadyPlaced {
                stone: stone.id(),
                pit: self.id,
                placed_in,
            });
        }

        let mut candidates = self.free_slots(false);
        if candidates.is_empty() {
            candidates = self.free_slots(true);
        }
        let slot = *rng
            .choose(&candidates)
            .ok_or(IntegrityError::NoEnabledSlots { pit: self.id })?;

        self.push(slot, stone)?;
        Ok(slot)
    }

    /// Put an unplaced stone into a specific slot.
    pub fn add_at(&mut self, slot: SlotId, stone: &mut Stone) -> Result<(), IntegrityError> {
        if let Some(placed_in) = stone.pit() {
            return Err(IntegrityError::AlreadyPlaced {
                stone: stone.id(),
                pit: self.id,
                placed_in,
            });
        }
        self.push(slot, stone)
    }

    fn push(&mut self, slot: SlotId, stone: &mut Stone) -> Result<(), IntegrityError> {
        match self.slots.get_mut(slot.index()) {
            Some(Slot::Open(stack)) => {
                stack.push(stone.id());
                stone.place(self.id, slot);
                Ok(())
            }
            _ => Err(IntegrityError::BadSlot { pit: self.id, slot }),
        }
    }

    /// Remove every stone from the pit.
    ///
    /// `stones` is the full stone list, indexed by `StoneId`. Each removed
    /// stone is marked unplaced. Returns the removed ids in ascending order.
    ///
    /// All stones are checked before any is removed, so a misplaced stone
    /// leaves the pit untouched.
    pub fn pickup(&mut self, stones: &mut [Stone]) -> Result<Vec<StoneId>, IntegrityError> {
        for id in self.stones() {
            let stone = stones
                .get(id.index())
                .ok_or(IntegrityError::UnknownStone { stone: id })?;
            if stone.pit() != Some(self.id) {
                return Err(IntegrityError::MisplacedStone {
                    stone: id,
                    pit: self.id,
                    recorded: stone.pit(),
                });
            }
        }

        let mut removed = Vec::with_capacity(self.count());
        for slot in &mut self.slots {
            if let Slot::Open(stack) = slot {
                for id in std::mem::take(stack) {
                    stones[id.index()].lift();
                    removed.push(id);
                }
            }
        }

        let residual = self.count();
        if residual > 0 {
            return Err(IntegrityError::ResidualStones { pit: self.id, residual });
        }

        removed.sort_unstable();
        Ok(removed)
    }

    /// Text picture of the pit.
    ///
    /// Disabled slots are blank, empty slots are `.`, and occupied slots
    /// show their stack height. The last line is `id: p<owner>` with a
    /// `(T)` marker on targets.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.slots.chunks(self.cols) {
            for slot in row {
                match slot {
                    Slot::Disabled => out.push(' '),
                    Slot::Open(stack) if stack.is_empty() => out.push('.'),
                    Slot::Open(stack) => out.push_str(&stack.len().to_string()),
                }
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "{}: p{} {}",
            self.id.0,
            self.owner.number(),
            if self.is_target { "(T)" } else { "" }
        ));
        out
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.id.0,
            self.count(),
            if self.is_target { "(T)" } else { "" }
        )
    }
}
