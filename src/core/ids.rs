//! Identifiers for board objects.
//!
//! ## ID Layout
//!
//! - `StoneId`: index into the session's stone list (`0..n_stones`)
//! - `PitId`: index into the ring (`0..2 * n_pits + 2`)
//! - `SlotId`: index into a pit's slot grid (row-major)
//!
//! Stone ids are stable for the lifetime of a session. Their order is
//! significant: sowing and capturing place stones in ascending id order,
//! which is what makes recorded games reproducible.
//!
//! ```
//! use bao_engine::core::{PitId, StoneId};
//!
//! let pit = PitId::new(6);
//! assert_eq!(pit.index(), 6);
//! assert_eq!(format!("{}", StoneId(3)), "Stone(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of a stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoneId(pub u32);

impl StoneId {
    /// Create a new stone ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index into the session's stone list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for StoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stone({})", self.0)
    }
}

/// Position of a pit on the ring.
///
/// Pit ids double as ring indices: sowing walks `PitId(i + 1 mod len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PitId(pub u16);

impl PitId {
    /// Create a new pit ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Ring index of this pit.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The pit after this one on a ring of `ring_len` pits.
    #[must_use]
    pub const fn next(self, ring_len: usize) -> Self {
        Self(((self.0 as usize + 1) % ring_len) as u16)
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pit({})", self.0)
    }
}

/// Addressable slot within a pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u16);

impl SlotId {
    /// Index into the pit's slot grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pit_next_wraps() {
        assert_eq!(PitId(0).next(14), PitId(1));
        assert_eq!(PitId(12).next(14), PitId(13));
        assert_eq!(PitId(13).next(14), PitId(0));
    }

    #[test]
    fn test_stone_ordering_follows_id() {
        let mut ids = vec![StoneId(5), StoneId(1), StoneId(3)];
        ids.sort();
        assert_eq!(ids, vec![StoneId(1), StoneId(3), StoneId(5)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", StoneId(42)), "Stone(42)");
        assert_eq!(format!("{}", PitId(7)), "Pit(7)");
        assert_eq!(format!("{}", SlotId(3)), "Slot(3)");
    }

    #[test]
    fn test_serialization() {
        let id = PitId(13);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PitId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
